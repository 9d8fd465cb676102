//! Hand-authored page content. Pure data, immutable for the session.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub stack: &'static str,
    pub overview: &'static str,
    pub details: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub const NAME: &str = "Vrishank Raina";
pub const TAGLINE: &str = "Innovative Full-Stack Developer & AI/ML Engineer building intelligent web applications and advanced AI systems.";
pub const EMAIL_URL: &str = "mailto:vrishankraina@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/hmm183";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/vrishank-raina";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const FOOTER_TEXT: &str = "Built by Vrishank Raina — 2025";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "ecom",
        title: "E-commerce Website",
        stack: "Node.js, MongoDB, JWT, OAuth",
        overview: "T-shirt selling platform with secure authentication and streamlined admin panel.",
        details: "Developed a scalable e-commerce platform featuring robust user authentication (JWT, OTP, Google OAuth), secure product management with variants, and a comprehensive admin dashboard for order tracking. Integrated MongoDB Atlas with CI/CD practices across Vercel and Render.",
    },
    Project {
        id: "captain",
        title: "Captain LLM",
        stack: "Whisper, LangChain, Local LLMs",
        overview: "Offline voice assistant enabling touch-free desktop automation.",
        details: "Engineered a hands-free local AI assistant utilizing open-source LLMs. Integrated wake-word detection along with Whisper-based transcription and a seamless LangChain processing pipeline to execute diverse desktop tasks via voice commands.",
    },
    Project {
        id: "medihelp",
        title: "MediHelp",
        stack: "YOLO, OpenCV, Regex, Gemini",
        overview: "AI-driven platform for intelligent analysis of medical images and text.",
        details: "Built an advanced image analysis tool leveraging YOLO for object detection, OpenCV for processing, and Regex for text extraction. Enhanced with a Google Gemini-powered chatbot integration for interactive and insightful medical image analysis.",
    },
    Project {
        id: "disaster",
        title: "Disaster Management System",
        stack: "Firebase, ESP32, Arduino",
        overview: "Remote surveillance and automation system for emergency scenarios.",
        details: "Designed a cloud-controlled 4-wheel chassis for remote area surveillance using ESP32 for Wi-Fi connectivity and Arduino Uno for motor control. Integrated real-time data synchronization via Google Firebase and automated video recording on detecting predefined events.",
    },
    Project {
        id: "agromitra",
        title: "AgroMitra",
        stack: "PHP, Python",
        overview: "A farmer assistance system providing daily updates and recommendations.",
        details: "Developed a system using PHP for the web interface and Python for backend logic to assist farmers with daily updates on subsidies and crop prices, along with intelligent fertilizer recommendations to enhance agricultural productivity.",
    },
    Project {
        id: "varp",
        title: "VARP Project",
        stack: "Python, SQL",
        overview: "Comprehensive hotel management system with reservation and valet parking.",
        details: "Built a full-featured hotel management system handling reservations, valet parking, user registration, verification, login, and automated bill production based on menu items and other services, utilizing Python for logic and SQL for database management.",
    },
    Project {
        id: "java-quiz",
        title: "Java Quiz System",
        stack: "Java (GUI, JDBC)",
        overview: "An efficient Java-based quiz management system.",
        details: "Designed and implemented a Java quiz system with a graphical user interface (GUI) and JDBC integration for seamless database connectivity. This system provides efficient management for quizzes and streamlined operations.",
    },
    Project {
        id: "coaweb",
        title: "COAWeb",
        stack: "HTML, CSS, JavaScript, Three.js",
        overview: "A web-based 3D model of the 8086 microprocessor.",
        details: "Created a dedicated website showcasing a detailed 3D interactive model of the 8086 microprocessor, providing an immersive educational experience about computer architecture.",
    },
];

pub const EXPERIENCES: &[Experience] = &[Experience {
    role: "Full Stack Developer",
    company: "College Connect at Purple Technologies",
    period: "January 2025 - March 2025",
    location: "Andra Pradesh",
    description: "Built a full-stack web application for efficient college event and club management using Node.js, Express.js, and MongoDB. Engineered RESTful API endpoints and deployed the multi-service system by leveraging robust CI/CD practices on Vercel and Render.",
}];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelors CSE-Core",
        institution: "VIT-AP University, Amaravati",
        period: "2027",
        details: "Graduated in the top 20% with an 8.82 CGPA.",
    },
    Education {
        degree: "PCMCE",
        institution: "Vydehi School of Excellence, Bengaluru",
        period: "2023",
        details: "Scored 85.6%, earning a Gold accolade at the Model United Nations conference.",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Cloud Computing",
        issuer: "BlackBucks",
        period: "2025",
        details: "Gained hands-on experience with AWS EC2 and S3 by deploying a static portfolio website and applied Docker for containerization in a Java application.",
    },
    Certification {
        title: "TechNov Certification",
        issuer: "VIT-AP",
        period: "2024",
        details: "Secured a top-3 finish in a 24-hour hackathon among 100+ teams and received an internship offer from Purple Technologies.",
    },
    Certification {
        title: "Google Developer Groups",
        issuer: "VIT-AP",
        period: "2024",
        details: "Selected for the Web and App development track and contributed to open-source projects for enhanced community impact.",
    },
];

/// Skill scores on a 0-5 scale, in radar-chart axis order.
pub const SKILL_PROFICIENCY: &[(&str, u8)] = &[
    ("Python", 5),
    ("C", 3),
    ("C++", 3),
    ("Java", 3),
    ("JavaScript", 5),
    ("React.js", 5),
    ("Node.js", 5),
    ("MongoDB", 5),
    ("Whisper", 3),
    ("LangChain", 3),
    ("YOLO", 3),
    ("OpenCV", 3),
    ("kotlin", 0),
    ("REST APIs", 4),
    ("CI/CD", 4),
    ("Firebase", 5),
    ("MySQL", 5),
    ("PostgreSQL", 4),
    ("GitHub", 4),
    ("PHP", 2),
    ("SQL", 5),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|project| project.id).collect();

        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_carries_both_text_modes() {
        for project in PROJECTS {
            assert!(!project.overview.is_empty(), "{} overview", project.id);
            assert!(!project.details.is_empty(), "{} details", project.id);
            assert_ne!(project.overview, project.details, "{}", project.id);
        }
    }

    #[test]
    fn skill_scores_stay_on_the_radar_scale() {
        for (skill, score) in SKILL_PROFICIENCY {
            assert!(*score <= 5, "{skill} scored {score}");
        }
    }

    #[test]
    fn section_tables_are_populated() {
        assert_eq!(PROJECTS.len(), 8);
        assert_eq!(EXPERIENCES.len(), 1);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(CERTIFICATIONS.len(), 3);
        assert_eq!(SKILL_PROFICIENCY.len(), 21);
    }
}
