//! Donation map on pages that contain a `#map` container.
//!
//! Uses Leaflet when the page loaded it (global `L`); otherwise the container
//! gets a static placeholder. Markers are fixed sample sites.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::config::{self, MapConfig};
use crate::dom;

const PLACEHOLDER: &str = "Map unavailable. Please check your connection.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub lat: f64,
    pub lng: f64,
    pub label: &'static str,
}

pub const SAMPLE_SITES: [Site; 3] = [
    Site {
        lat: 12.9750,
        lng: 77.5990,
        label: "Central canteen: surplus lunch pickup",
    },
    Site {
        lat: 12.9680,
        lng: 77.5890,
        label: "Hostel block B: evening meal drop-off",
    },
    Site {
        lat: 12.9785,
        lng: 77.5870,
        label: "Community kitchen partner",
    },
];

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &Array) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;
}

fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}

fn sdk_loaded() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("L")).ok())
        .is_some_and(|l| !l.is_undefined() && !l.is_null())
}

fn build(settings: &MapConfig) -> Result<(), JsValue> {
    let map = leaflet_map(settings.container_id)?;
    map.set_view(&lat_lng(settings.center.0, settings.center.1), settings.zoom);

    let options = Object::new();
    Reflect::set(&options, &"attribution".into(), &settings.attribution.into())?;
    Reflect::set(&options, &"maxZoom".into(), &JsValue::from_f64(19.0))?;
    tile_layer(settings.tile_url, &options)?.add_to(&map);

    for site in SAMPLE_SITES {
        marker(&lat_lng(site.lat, site.lng))?
            .add_to(&map)
            .bind_popup(site.label);
    }
    Ok(())
}

/// Renders the map into the configured container, if the page has one.
pub fn init() {
    let settings = &config::current().map;
    if dom::element_by_id(settings.container_id).is_none() {
        return;
    }

    if !sdk_loaded() {
        dom::set_text(settings.container_id, PLACEHOLDER);
        return;
    }

    if let Err(err) = build(settings) {
        gloo_console::warn!("map setup failed:", err);
        dom::set_text(settings.container_id, PLACEHOLDER);
    }
}
