use crate::constants::RIG_MAX_DT_SEC;
use crate::scroll::{clamp_frame_dt, scroll_fraction};
use glam::Vec3;
use wasm_bindgen::prelude::*;
use warp_core::{CameraRig, ConfigError, RigConfig};

fn config_err(e: ConfigError) -> JsValue {
    log::error!("[rig] {e}");
    JsValue::from_str(&e.to_string())
}

/// Scroll-driven camera for a host scene graph. Poses come back as plain
/// arrays: position `[x, y, z]`, rotation quaternion `[x, y, z, w]`.
#[wasm_bindgen(js_name = CameraRig)]
pub struct JsCameraRig {
    rig: CameraRig,
}

impl JsCameraRig {
    fn build(config: RigConfig) -> Result<JsCameraRig, JsValue> {
        CameraRig::new(config)
            .map(|rig| JsCameraRig { rig })
            .map_err(config_err)
    }
}

#[wasm_bindgen(js_class = CameraRig)]
impl JsCameraRig {
    /// Blocks on a descending spiral, camera orbiting outside.
    pub fn helix(block_count: usize) -> Result<JsCameraRig, JsValue> {
        Self::build(RigConfig::spiral(block_count))
    }

    pub fn dolly(start_z: f32, length: f32, blocks: usize) -> Result<JsCameraRig, JsValue> {
        Self::build(RigConfig::dolly(start_z, length, blocks))
    }

    /// `points` is flat `[x0, y0, z0, x1, y1, z1, ...]`; a trailing partial
    /// triple is ignored.
    pub fn corridor(points: &[f32]) -> Result<JsCameraRig, JsValue> {
        let waypoints = points
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        Self::build(RigConfig::corridor(waypoints))
    }

    pub fn update(&mut self, scroll: f32, dt_sec: f32) {
        self.rig.update(scroll, clamp_frame_dt(dt_sec, RIG_MAX_DT_SEC));
    }

    /// `update` with the fraction computed from element scroll metrics.
    #[wasm_bindgen(js_name = updateFromScroll)]
    pub fn update_from_scroll(
        &mut self,
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
        dt_sec: f32,
    ) {
        let f = scroll_fraction(scroll_top, scroll_height, client_height);
        self.update(f, dt_sec);
    }

    pub fn position(&self) -> Vec<f32> {
        self.rig.pose().position.to_array().to_vec()
    }

    pub fn rotation(&self) -> Vec<f32> {
        self.rig.pose().rotation.to_array().to_vec()
    }

    pub fn visibility(&self, index: usize) -> f32 {
        self.rig.visibility(index)
    }

    pub fn visibilities(&self) -> Vec<f32> {
        let mut out = Vec::new();
        self.rig.visibilities_into(&mut out);
        out
    }

    #[wasm_bindgen(js_name = blockPosition)]
    pub fn block_position(&self, index: usize) -> Option<Vec<f32>> {
        self.rig
            .mapper()
            .path
            .block_anchor(index)
            .map(|p| p.to_array().to_vec())
    }

    #[wasm_bindgen(getter, js_name = blockCount)]
    pub fn block_count(&self) -> usize {
        self.rig.mapper().path.block_count()
    }

    #[wasm_bindgen(getter)]
    pub fn scroll(&self) -> f32 {
        self.rig.scroll()
    }
}

#[wasm_bindgen(js_name = scrollFraction)]
pub fn scroll_fraction_js(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    scroll_fraction(scroll_top, scroll_height, client_height)
}
