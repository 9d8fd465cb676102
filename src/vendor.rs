//! Bindings to the CDN-loaded visual collaborators. Each library is consumed
//! as a black box: this crate only hands over configuration.

use crate::carousel::CarouselConfig;
use crate::chart::RadarChartConfig;
use crate::particles::{ParticlesConfig, PARTICLES_CONTAINER_ID};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Chart.js UMD global.
    #[wasm_bindgen(js_name = Chart)]
    pub type RadarChart;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    pub fn new(canvas: &Element, config: &JsValue) -> RadarChart;

    #[wasm_bindgen(method, js_class = "Chart")]
    pub fn destroy(this: &RadarChart);

    /// tiny-slider UMD global.
    #[wasm_bindgen(js_name = tns)]
    fn tns(options: &JsValue) -> JsValue;

    /// tsParticles slim-bundle global.
    #[wasm_bindgen(js_namespace = tsParticles, js_name = load)]
    fn ts_particles_load(id: &str, options: &JsValue) -> js_sys::Promise;
}

/// Serializes a typed config into a plain JS object for the collaborators.
fn to_js_options<T: Serialize>(config: &T) -> Option<JsValue> {
    let raw = serde_json::to_string(config).ok()?;
    js_sys::JSON::parse(&raw).ok()
}

pub fn mount_radar_chart(canvas: &Element, config: &RadarChartConfig) -> Option<RadarChart> {
    let options = to_js_options(config)?;
    Some(RadarChart::new(canvas, &options))
}

pub fn mount_carousel(config: &CarouselConfig) {
    if let Some(options) = to_js_options(config) {
        let _ = tns(&options);
    }
}

/// Kicks off the asynchronous particle engine initialization. Failures leave
/// the backdrop empty; the page renders regardless.
pub fn start_particles(config: &ParticlesConfig) {
    let Some(options) = to_js_options(config) else {
        return;
    };

    let loading = ts_particles_load(PARTICLES_CONTAINER_ID, &options);
    spawn_local(async move {
        let _ = JsFuture::from(loading).await;
    });
}
