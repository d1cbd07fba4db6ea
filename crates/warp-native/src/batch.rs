//! CPU tessellation of [`Surface2d`] calls into one pixel-space triangle list.

use glam::{Vec2, Vec4};
use warp_core::Surface2d;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const MIN_CIRCLE_SEGMENTS: usize = 6;
const MAX_CIRCLE_SEGMENTS: usize = 24;

#[derive(Default)]
pub struct SpriteBatch {
    vertices: Vec<Vertex>,
}

impl SpriteBatch {
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push(&mut self, p: Vec2, color: [f32; 4]) {
        self.vertices.push(Vertex {
            pos: p.to_array(),
            color,
        });
    }

    // a-b-c-d in winding order; no culling is configured
    fn push_quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Vec4) {
        let color = color.to_array();
        for p in [a, b, c, a, c, d] {
            self.push(p, color);
        }
    }
}

impl Surface2d for SpriteBatch {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4) {
        self.push_quad(
            origin,
            origin + Vec2::new(size.x, 0.0),
            origin + size,
            origin + Vec2::new(0.0, size.y),
            color,
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        let dir = to - from;
        let len = dir.length();
        if len <= f32::EPSILON {
            self.fill_circle(from, width * 0.5, color);
            return;
        }
        let n = (dir / len).perp() * (width * 0.5);
        self.push_quad(from + n, to + n, to - n, from - n, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let segments = ((radius * 2.0) as usize).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS);
        let color = color.to_array();
        let step = std::f32::consts::TAU / segments as f32;
        let mut prev = center + Vec2::new(radius, 0.0);
        for i in 1..=segments {
            let a = i as f32 * step;
            let next = center + Vec2::new(a.cos(), a.sin()) * radius;
            self.push(center, color);
            self.push(prev, color);
            self.push(next, color);
            prev = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_two_triangles() {
        let mut batch = SpriteBatch::default();
        batch.fill_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec4::ONE);
        assert_eq!(batch.len(), 6);
        assert_eq!(batch.vertices()[2].pos, [4.0, 6.0]);
    }

    #[test]
    fn line_has_requested_width() {
        let mut batch = SpriteBatch::default();
        batch.draw_line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, Vec4::ONE);
        assert_eq!(batch.len(), 6);
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.pos[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 2.0).abs() < 1e-6));
    }

    #[test]
    fn zero_length_line_becomes_dot() {
        let mut batch = SpriteBatch::default();
        batch.draw_line(Vec2::ONE, Vec2::ONE, 2.0, Vec4::ONE);
        assert_eq!(batch.len(), MIN_CIRCLE_SEGMENTS * 3);
    }

    #[test]
    fn degenerate_circles_emit_nothing() {
        let mut batch = SpriteBatch::default();
        batch.fill_circle(Vec2::ZERO, 0.0, Vec4::ONE);
        batch.fill_circle(Vec2::ZERO, f32::NAN, Vec4::ONE);
        assert!(batch.is_empty());
        batch.fill_circle(Vec2::ZERO, 100.0, Vec4::ONE);
        assert_eq!(batch.len(), MAX_CIRCLE_SEGMENTS * 3);
    }
}
