#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod delivery;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod hover;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll_spy;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod spotlight;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod archive;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), server::ServerError> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
