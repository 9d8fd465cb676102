//! Typed configuration for the particle-background collaborator.

use serde::Serialize;

/// Id of the container element the particle canvas is injected into.
pub const PARTICLES_CONTAINER_ID: &str = "tsparticles";

const PARTICLE_GREY: &str = "#888";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParticlesConfig {
    pub background: Background,
    pub fps_limit: u32,
    pub interactivity: Interactivity,
    pub particles: ParticleSettings,
    pub detect_retina: bool,
}

#[derive(Serialize, Debug)]
pub struct Background {
    pub color: ColorValue,
}

#[derive(Serialize, Debug)]
pub struct ColorValue {
    pub value: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Interactivity {
    pub events: InteractionEvents,
    pub modes: InteractionModes,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvents {
    pub on_click: InteractionToggle,
    pub on_hover: InteractionToggle,
    pub resize: bool,
}

#[derive(Serialize, Debug)]
pub struct InteractionToggle {
    pub enable: bool,
    pub mode: &'static str,
}

#[derive(Serialize, Debug)]
pub struct InteractionModes {
    pub push: PushMode,
    pub repulse: RepulseMode,
}

#[derive(Serialize, Debug)]
pub struct PushMode {
    pub quantity: u8,
}

#[derive(Serialize, Debug)]
pub struct RepulseMode {
    pub distance: u16,
    pub duration: f64,
}

#[derive(Serialize, Debug)]
pub struct ParticleSettings {
    pub color: ColorValue,
    pub links: Links,
    pub collisions: Toggle,
    #[serde(rename = "move")]
    pub movement: Movement,
    pub number: ParticleCount,
    pub opacity: OpacityValue,
    pub shape: Shape,
    pub size: SizeRange,
}

#[derive(Serialize, Debug)]
pub struct Links {
    pub color: &'static str,
    pub distance: u16,
    pub enable: bool,
    pub opacity: f64,
    pub width: u8,
}

#[derive(Serialize, Debug)]
pub struct Toggle {
    pub enable: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub direction: &'static str,
    pub enable: bool,
    pub out_modes: OutModes,
    pub random: bool,
    pub speed: f64,
    pub straight: bool,
}

#[derive(Serialize, Debug)]
pub struct OutModes {
    pub default: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ParticleCount {
    pub density: Density,
    pub value: u16,
}

#[derive(Serialize, Debug)]
pub struct Density {
    pub enable: bool,
    pub area: u16,
}

#[derive(Serialize, Debug)]
pub struct OpacityValue {
    pub value: f64,
}

#[derive(Serialize, Debug)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Serialize, Debug)]
pub struct SizeRange {
    pub value: MinMax,
}

#[derive(Serialize, Debug)]
pub struct MinMax {
    pub min: u8,
    pub max: u8,
}

/// Ambient backdrop: fifty slow grey particles with linked edges, repulsed
/// on hover and pushed on click.
pub fn ambient_particles() -> ParticlesConfig {
    ParticlesConfig {
        background: Background {
            color: ColorValue {
                value: "transparent",
            },
        },
        fps_limit: 60,
        interactivity: Interactivity {
            events: InteractionEvents {
                on_click: InteractionToggle {
                    enable: true,
                    mode: "push",
                },
                on_hover: InteractionToggle {
                    enable: true,
                    mode: "repulse",
                },
                resize: true,
            },
            modes: InteractionModes {
                push: PushMode { quantity: 4 },
                repulse: RepulseMode {
                    distance: 100,
                    duration: 0.4,
                },
            },
        },
        particles: ParticleSettings {
            color: ColorValue {
                value: PARTICLE_GREY,
            },
            links: Links {
                color: PARTICLE_GREY,
                distance: 150,
                enable: true,
                opacity: 0.3,
                width: 1,
            },
            collisions: Toggle { enable: true },
            movement: Movement {
                direction: "none",
                enable: true,
                out_modes: OutModes { default: "bounce" },
                random: false,
                speed: 1.0,
                straight: false,
            },
            number: ParticleCount {
                density: Density {
                    enable: true,
                    area: 800,
                },
                value: 50,
            },
            opacity: OpacityValue { value: 0.5 },
            shape: Shape { kind: "circle" },
            size: SizeRange {
                value: MinMax { min: 1, max: 3 },
            },
        },
        detect_retina: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_matches_the_renderer_schema() {
        let raw = serde_json::to_value(ambient_particles()).expect("serializable");

        assert_eq!(raw["fpsLimit"], 60);
        assert_eq!(raw["detectRetina"], true);
        assert_eq!(raw["background"]["color"]["value"], "transparent");
        assert_eq!(raw["interactivity"]["events"]["onHover"]["mode"], "repulse");
        assert_eq!(raw["interactivity"]["events"]["onClick"]["mode"], "push");
        assert_eq!(raw["interactivity"]["modes"]["push"]["quantity"], 4);
        assert_eq!(raw["interactivity"]["modes"]["repulse"]["distance"], 100);
        assert_eq!(raw["particles"]["move"]["outModes"]["default"], "bounce");
        assert_eq!(raw["particles"]["links"]["distance"], 150);
        assert_eq!(raw["particles"]["number"]["value"], 50);
        assert_eq!(raw["particles"]["shape"]["type"], "circle");
        assert_eq!(raw["particles"]["size"]["value"]["max"], 3);
    }

    #[test]
    fn both_link_endpoints_share_the_particle_color() {
        let config = ambient_particles();

        assert_eq!(config.particles.color.value, config.particles.links.color);
    }
}
