use artboard::config::{Config, PreviewMode};
use artboard::draw::{BLACK, RED, WHITE};
use artboard::input::{Point, PointerEvent, Tool};
use artboard::publish::{
    self, ArtworkCategory, ArtworkDetails, PublishOutcome, PublishedArtwork, Publisher,
};
use artboard::script::{self, Pacing, StrokeScript};
use artboard::{DrawingSurface, SurfaceOptions};
use std::cell::RefCell;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn black_surface(width: i32, height: i32) -> DrawingSurface {
    DrawingSurface::new(SurfaceOptions {
        background: BLACK,
        ..SurfaceOptions::with_size(width, height)
    })
    .unwrap()
}

fn drag(surface: &mut DrawingSurface, from: (f64, f64), to: &[(f64, f64)]) {
    surface.handle_event(PointerEvent::Press(from.into()));
    for point in to {
        surface.handle_event(PointerEvent::Move(Point::from(*point)));
    }
    surface.handle_event(PointerEvent::Release);
}

#[test]
fn config_drives_surface_defaults() {
    let config = Config::from_toml_str(
        r#"
        [canvas]
        width = 64
        height = 48
        background = "black"
        preview_mode = "scratch"

        [drawing]
        default_tool = "circle"
        default_color = "red"
        default_line_width = 3
        "#,
    )
    .unwrap();

    let surface = DrawingSurface::new(config.surface_options()).unwrap();
    assert_eq!((surface.width(), surface.height()), (64, 48));
    assert_eq!(surface.background(), BLACK);
    assert_eq!(surface.tool(), Tool::Circle);
    assert_eq!(surface.color(), RED);
    assert_eq!(surface.line_width(), 3);
    assert_eq!(surface.preview_mode(), PreviewMode::Scratch);
    assert!(surface.pixels().iter().all(|p| *p == [0, 0, 0]));
}

#[test]
fn scratch_preview_keeps_only_final_rectangle() {
    let mut surface = black_surface(60, 60);
    surface.set_tool(Tool::Rectangle);
    surface.set_preview_mode(PreviewMode::Scratch);

    drag(&mut surface, (10.0, 10.0), &[(30.0, 30.0), (20.0, 20.0)]);

    assert_eq!(surface.pixel(20, 15), Some([255, 255, 255]));
    assert_eq!(surface.pixel(30, 20), Some([0, 0, 0]));
}

#[test]
fn overlay_preview_leaves_every_outline() {
    let mut surface = black_surface(60, 60);
    surface.set_tool(Tool::Rectangle);

    drag(&mut surface, (10.0, 10.0), &[(30.0, 30.0), (20.0, 20.0)]);

    assert_eq!(surface.pixel(20, 15), Some([255, 255, 255]));
    assert_eq!(surface.pixel(30, 20), Some([255, 255, 255]));
}

#[test]
fn script_replay_then_export_produces_png() {
    let script = StrokeScript::from_toml_str(
        r#"
        [[step]]
        op = "color"
        color = "white"

        [[step]]
        op = "press"
        x = 5
        y = 20

        [[step]]
        op = "move"
        x = 35
        y = 20

        [[step]]
        op = "release"
        "#,
    )
    .unwrap();

    let mut surface = black_surface(40, 40);
    let pacing = Pacing {
        fps: 1000,
        steps_per_frame: 1,
    };
    let frames = script::replay_paced(&mut surface, script.steps, pacing).unwrap();

    assert_eq!(frames, 4);
    assert_eq!(surface.color(), WHITE);
    assert_eq!(surface.pixel(20, 20), Some([255, 255, 255]));

    let png = surface.export_image().unwrap();
    assert_eq!(&png[0..8], &PNG_SIGNATURE);
}

#[derive(Default)]
struct Inbox {
    received: RefCell<Vec<PublishedArtwork>>,
}

impl Publisher for Inbox {
    fn publish(&self, artwork: PublishedArtwork) {
        self.received.borrow_mut().push(artwork);
    }
}

#[test]
fn publishing_requires_login_and_sends_export() {
    let mut surface = black_surface(32, 32);
    drag(&mut surface, (4.0, 4.0), &[(28.0, 28.0)]);

    let inbox = Inbox::default();
    let details = ArtworkDetails {
        title: "Night".into(),
        description: "A diagonal".into(),
        category: ArtworkCategory::Abstract,
        allow_reviews: true,
    };

    let outcome = publish::publish_artwork(&surface, &false, &inbox, details.clone()).unwrap();
    assert_eq!(outcome, PublishOutcome::LoginRequired);
    assert!(inbox.received.borrow().is_empty());

    let outcome = publish::publish_artwork(&surface, &true, &inbox, details).unwrap();
    let expected = surface.export_image().unwrap();
    assert_eq!(
        outcome,
        PublishOutcome::Submitted {
            bytes: expected.len()
        }
    );
    assert_eq!(inbox.received.borrow()[0].image, expected);
}
