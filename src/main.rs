#[cfg(target_arch = "wasm32")]
mod app;
mod carousel;
mod chart;
mod content;
mod disclosure;
mod particles;
#[cfg(not(target_arch = "wasm32"))]
mod server;
mod theme;
#[cfg(target_arch = "wasm32")]
mod vendor;
mod visibility;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    app::run();
}
