//! Batch construction and replay tests.
//!
//! These drive a [`BatchManager`] through whole frames and check what a
//! render device receives.

use glam::{Mat4, Vec2, Vec3};
use tessel_core::geometry::Rect;
use tessel_render::{
    BatchConfig, BatchKind, BatchManager, BlendMode, Color, LinearGradient, TextureHandle, UvRect,
};
use tessel_test_utils::{MockRenderDevice, MockTexture, RenderCall};

fn texture(id: u64) -> TextureHandle {
    MockTexture::new(id, 32, 32).handle()
}

fn kinds(manager: &BatchManager) -> Vec<BatchKind> {
    manager.batches().iter().map(|b| b.kind()).collect()
}

fn sunset() -> LinearGradient {
    LinearGradient::vertical()
        .with_stop(0.0, Color::rgb(1.0, 0.5, 0.0))
        .with_stop(1.0, Color::rgb(0.2, 0.0, 0.4))
}

// ====================
// Merge rules
// ====================

#[test]
fn test_same_texture_merges_into_one_batch() {
    let atlas = texture(1);
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_texture_quad(&atlas, &Mat4::IDENTITY, Color::WHITE);
    manager.add_texture_quad(&atlas, &Mat4::from_translation(Vec3::X * 40.0), Color::WHITE);

    assert_eq!(kinds(&manager), [BatchKind::BlendModeChange, BatchKind::TextureQuads]);
    assert_eq!(manager.batches()[1].quad_count(), 2);
}

#[test]
fn test_different_textures_open_new_batches() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_texture_quad(&texture(1), &Mat4::IDENTITY, Color::WHITE);
    manager.add_texture_quad(&texture(2), &Mat4::IDENTITY, Color::WHITE);

    assert_eq!(
        kinds(&manager),
        [BatchKind::BlendModeChange, BatchKind::TextureQuads, BatchKind::TextureQuads]
    );
    assert_eq!(manager.stats().texture_count, 2);
}

#[test]
fn test_texture_identity_not_size_decides_compatibility() {
    let a = MockTexture::new(5, 32, 32).handle();
    let a_again = MockTexture::new(5, 32, 32).handle();

    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_texture_quad(&a, &Mat4::IDENTITY, Color::WHITE);
    manager.add_texture_quad(&a_again, &Mat4::IDENTITY, Color::WHITE);

    assert_eq!(manager.stats().texture_batches, 1);
}

#[test]
fn test_full_texture_batch_spills_into_next() {
    let config = BatchConfig::default().with_texture_quads(3);
    let mut manager = BatchManager::with_config(config).unwrap();
    let atlas = texture(1);

    manager.begin();
    for _ in 0..7 {
        manager.add_texture_quad(&atlas, &Mat4::IDENTITY, Color::WHITE);
    }

    let counts: Vec<_> = manager.batches().iter().map(|b| b.quad_count()).collect();
    assert_eq!(counts, [0, 3, 3, 1]);
}

#[test]
fn test_blend_mode_changes_never_merge() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.change_blend_mode(BlendMode::Multiply);
    manager.change_blend_mode(BlendMode::Multiply);

    assert_eq!(
        kinds(&manager),
        [
            BatchKind::BlendModeChange,
            BatchKind::BlendModeChange,
            BatchKind::BlendModeChange
        ]
    );
}

#[test]
fn test_custom_shaders_never_merge() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_custom_shader("blur");
    manager.add_custom_shader("blur");
    assert_eq!(manager.stats().custom_shaders, 2);
}

#[test]
fn test_identical_resolved_gradients_merge() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 20.0, &sunset());
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 20.0, &sunset());

    assert_eq!(manager.stats().gradient_batches, 1);
    assert_eq!(manager.stats().quad_count, 2);
}

#[test]
fn test_differing_stop_forces_new_gradient_batch() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 20.0, &sunset());
    let tweaked = LinearGradient::vertical()
        .with_stop(0.0, Color::rgb(1.0, 0.5, 0.0))
        .with_stop(0.9, Color::rgb(0.2, 0.0, 0.4));
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 20.0, &tweaked);

    assert_eq!(manager.stats().gradient_batches, 2);
}

#[test]
fn test_differing_endpoint_forces_new_gradient_batch() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 20.0, &sunset());
    manager.add_linear_gradient_quad(0.0, 0.0, 100.0, 21.0, &sunset());

    assert_eq!(manager.stats().gradient_batches, 2);
}

// ====================
// Frame lifecycle
// ====================

#[test]
fn test_begin_discards_previous_frame() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_color_quad(0.0, 0.0, 1.0, 1.0, Color::RED);
    manager.add_custom_shader("glow");

    manager.begin();
    manager.add_color_quad(5.0, 5.0, 6.0, 6.0, Color::BLUE);

    let device = MockRenderDevice::new();
    manager.end(&device);

    let calls = device.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], RenderCall::Begin);
    assert_eq!(calls[1], RenderCall::ChangeBlendMode(BlendMode::Blend));
    match &calls[2] {
        RenderCall::ColorQuads { vertices } => {
            assert_eq!(vertices.len(), 4);
            assert_eq!(vertices[0].position, [5.0, 5.0]);
            assert_eq!(vertices[0].color, Color::BLUE.to_array());
        }
        other => panic!("unexpected call {:?}", other),
    }
    assert_eq!(calls[3], RenderCall::End);
}

#[test]
fn test_end_brackets_replay_with_device_hooks() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_custom_shader("sepia");
    manager.add_texture_quad(&texture(3), &Mat4::IDENTITY, Color::WHITE);
    manager.change_blend_mode(BlendMode::Multiply);

    let device = MockRenderDevice::new();
    manager.end(&device);

    let calls = device.calls();
    assert_eq!(calls.first(), Some(&RenderCall::Begin));
    assert_eq!(calls.last(), Some(&RenderCall::End));
    assert_eq!(calls[2], RenderCall::ActivateCustomShader("sepia".to_string()));
    assert!(matches!(calls[3], RenderCall::TextureQuads { .. }));
    assert_eq!(calls[4], RenderCall::ChangeBlendMode(BlendMode::Multiply));
    assert_eq!(device.count_blend_mode_changes(), 2);
}

#[test]
fn test_end_without_begin_only_brackets() {
    let manager = BatchManager::new();
    let device = MockRenderDevice::new();
    manager.end(&device);
    assert_eq!(device.calls(), [RenderCall::Begin, RenderCall::End]);
}

// ====================
// Vertex data
// ====================

#[test]
fn test_texture_quad_uses_texture_size_and_uv() {
    let page = MockTexture::in_atlas(9, 64, 16, UvRect::new(0.5, 0.0, 1.0, 0.25)).handle();
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_texture_quad(&page, &Mat4::from_translation(Vec3::new(10.0, 20.0, 0.0)), Color::RED);

    let device = MockRenderDevice::new();
    manager.end(&device);

    let calls = device.calls();
    let RenderCall::TextureQuads { texture, vertices } = &calls[2] else {
        panic!("expected texture quads, got {:?}", calls[2]);
    };
    assert_eq!(texture.0, 9);
    assert_eq!(vertices[0].position, [10.0, 20.0]);
    assert_eq!(vertices[2].position, [74.0, 36.0]);
    assert_eq!(vertices[0].uv, [0.5, 0.0]);
    assert_eq!(vertices[2].uv, [1.0, 0.25]);
    assert_eq!(vertices[1].color, Color::RED.to_array());
}

#[test]
fn test_texture_quad_region() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_texture_quad_region(
        &texture(1),
        &Mat4::IDENTITY,
        Rect::new(4.0, 4.0, 8.0, 2.0),
        UvRect::new(0.0, 0.0, 0.5, 0.5),
        Color::WHITE,
    );

    let device = MockRenderDevice::new();
    manager.end(&device);
    let calls = device.calls();
    let RenderCall::TextureQuads { vertices, .. } = &calls[2] else {
        panic!("expected texture quads");
    };
    assert_eq!(vertices[1].position, [12.0, 4.0]);
    assert_eq!(vertices[3].position, [4.0, 6.0]);
    assert_eq!(vertices[2].uv, [0.5, 0.5]);
}

#[test]
fn test_gradient_replayed_in_absolute_coordinates() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_linear_gradient_quad(50.0, 100.0, 150.0, 300.0, &sunset());

    let device = MockRenderDevice::new();
    manager.end(&device);
    let calls = device.calls();
    let RenderCall::LinearGradientQuads { gradient, vertices } = &calls[2] else {
        panic!("expected gradient quads");
    };
    assert_eq!(gradient.start, Vec2::new(50.0, 100.0));
    assert_eq!(gradient.end, Vec2::new(50.0, 300.0));
    assert_eq!(gradient.stops.len(), 2);
    assert_eq!(vertices[2].position, [150.0, 300.0]);
}

#[test]
fn test_color_quad_corners() {
    let mut manager = BatchManager::new();
    manager.begin();
    manager.add_color_quad_corners(
        0.0,
        0.0,
        10.0,
        10.0,
        [Color::RED, Color::RED, Color::BLUE, Color::BLUE],
    );

    let device = MockRenderDevice::new();
    manager.end(&device);
    let calls = device.calls();
    let RenderCall::ColorQuads { vertices } = &calls[2] else {
        panic!("expected color quads");
    };
    assert_eq!(vertices[1].color, Color::RED.to_array());
    assert_eq!(vertices[3].color, Color::BLUE.to_array());
}

// ====================
// Order preservation
// ====================

/// What a non-batching renderer would draw, one entry per quad or state change.
#[derive(Debug, Clone, PartialEq)]
enum Drawn {
    Blend(BlendMode),
    Shader(String),
    Textured(u64, [f32; 2]),
    Colored([f32; 2]),
    Gradient([f32; 2]),
}

/// Expand device calls back into the per-quad stream.
fn flatten(calls: &[RenderCall]) -> Vec<Drawn> {
    let mut drawn = Vec::new();
    for call in calls {
        match call {
            RenderCall::Begin | RenderCall::End => {}
            RenderCall::ChangeBlendMode(mode) => drawn.push(Drawn::Blend(*mode)),
            RenderCall::ActivateCustomShader(id) => drawn.push(Drawn::Shader(id.clone())),
            RenderCall::TextureQuads { texture, vertices } => drawn.extend(
                vertices
                    .chunks(4)
                    .map(|quad| Drawn::Textured(texture.0, quad[0].position)),
            ),
            RenderCall::ColorQuads { vertices } => {
                drawn.extend(vertices.chunks(4).map(|quad| Drawn::Colored(quad[0].position)))
            }
            RenderCall::LinearGradientQuads { vertices, .. } => {
                drawn.extend(vertices.chunks(4).map(|quad| Drawn::Gradient(quad[0].position)))
            }
        }
    }
    drawn
}

/// Small deterministic generator so the mixed workload is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_replay_matches_submission_order() {
    let textures: Vec<_> = (0..3).map(texture).collect();
    let gradients = [sunset(), LinearGradient::horizontal().with_stop(0.0, Color::GREEN)];

    let config = BatchConfig::uniform(4);
    let mut manager = BatchManager::with_config(config).unwrap();
    let mut rng = Lcg(42);
    let mut expected = vec![Drawn::Blend(BlendMode::Blend)];

    manager.begin();
    for i in 0..500 {
        let x = i as f32;
        match rng.next() % 6 {
            0 | 1 => {
                let id = rng.next() % 3;
                let transform = Mat4::from_translation(Vec3::new(x, 0.0, 0.0));
                manager.add_texture_quad(&textures[id as usize], &transform, Color::WHITE);
                expected.push(Drawn::Textured(id, [x, 0.0]));
            }
            2 => {
                manager.add_color_quad(x, 1.0, x + 1.0, 2.0, Color::RED);
                expected.push(Drawn::Colored([x, 1.0]));
            }
            3 => {
                let gradient = &gradients[(rng.next() % 2) as usize];
                manager.add_linear_gradient_quad(0.0, x, 10.0, x + 1.0, gradient);
                expected.push(Drawn::Gradient([0.0, x]));
            }
            4 => {
                let mode = if rng.next() % 2 == 0 {
                    BlendMode::Blend
                } else {
                    BlendMode::Multiply
                };
                manager.change_blend_mode(mode);
                expected.push(Drawn::Blend(mode));
            }
            _ => {
                let id = format!("shader-{}", rng.next() % 2);
                manager.add_custom_shader(id.clone());
                expected.push(Drawn::Shader(id));
            }
        }
    }

    let device = MockRenderDevice::new();
    manager.end(&device);

    assert_eq!(flatten(&device.calls()), expected);
    assert_eq!(device.quad_count(), manager.stats().quad_count);
    assert_eq!(device.count_draw_calls(), manager.stats().draw_calls());
    assert!(manager.batches().len() < expected.len());
}
