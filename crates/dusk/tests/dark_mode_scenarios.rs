#![forbid(unsafe_code)]

//! End-to-end dark-mode scenarios through the public facade.
//!
//! Run:
//!   cargo test -p dusk --test dark_mode_scenarios

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dusk::prelude::*;
use dusk::{ExtractError, ResourceError};
use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Fixtures
// ============================================================================

const ACCENT: ResourceId = ResourceId(0x7f06_0001);
const BUTTON: ResourceId = ResourceId(0x7f06_0002);

fn muted_gray() -> Argb {
    Argb::from_hsl(Hsl::new(30.0, 0.3, 0.5))
}

fn button() -> ColorStateList {
    ColorStateList::from_rows([
        (StateMask::requiring(StateFlags::FOCUSED), Argb::RED),
        (StateMask::requiring(StateFlags::PRESSED), Argb::BLUE),
        (StateMask::ANY, muted_gray()),
    ])
}

fn table() -> ResourceTable {
    ResourceTable::new()
        .with_color(ACCENT, Argb::RED)
        .with_list(BUTTON, button())
}

// ============================================================================
// Event capture (adapted from the runtime span-hierarchy tests)
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: HashMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.message = text;
        } else {
            self.fields.insert(field.name().to_string(), text);
        }
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn with_captured_events<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    let out = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    (out, captured)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn opaque_red_desaturates_to_threshold() {
    let night = DesaturatedResources::with_defaults(table(), true);
    let out = night.get_color(ACCENT).unwrap();
    let hsl = out.to_hsl();

    assert_eq!(out.a(), 255);
    assert!(hsl.h.abs() < 1e-3);
    assert!((hsl.s - 0.75).abs() < 1.0 / 255.0);
    assert!((hsl.l - 0.5).abs() < 1.0 / 255.0);
}

#[test]
fn muted_gray_is_returned_unchanged() {
    let gray = muted_gray();
    assert_eq!(desaturate(gray, 0.25, 0.75), gray);
}

#[test]
fn three_row_list_keeps_masks_and_softens_saturated_rows() {
    let night = DesaturatedResources::with_defaults(table(), true);
    let list = night.get_color_state_list(BUTTON).unwrap();
    let raw = button();

    assert_eq!(list.states(), raw.states());
    assert_eq!(list.colors()[0], desaturate(Argb::RED, 0.25, 0.75));
    assert_eq!(list.colors()[1], desaturate(Argb::BLUE, 0.25, 0.75));
    assert_eq!(list.colors()[2], muted_gray());

    assert_eq!(
        list.color_for_state(StateFlags::PRESSED, Argb::BLACK),
        Argb::rgb(32, 32, 223)
    );
}

#[test]
fn light_mode_returns_resolver_values() {
    let light = DesaturatedResources::with_defaults(table(), false);
    assert_eq!(light.get_color(ACCENT).unwrap(), Argb::RED);
    assert_eq!(*light.get_color_state_list(BUTTON).unwrap(), button());
}

#[test]
fn sample_app_parameters() {
    // Half amount, half threshold: red goes from 1.0 to 0.5 saturation.
    let night = DesaturatedResources::new(table(), true, Desaturation::new(0.5, 0.5));
    let s = night.get_color(ACCENT).unwrap().to_hsl().s;
    assert!((s - 0.5).abs() < 1.0 / 255.0);
}

#[test]
fn switch_follows_night_mode_toggle() {
    let switch = DarkModeSwitch::new(table(), &DarkModeConfig::default());
    assert_eq!(switch.resolve_color(ACCENT, None).unwrap(), Argb::RED);

    switch.toggle();
    let night_list = switch.resolve_color_state_list(BUTTON, None).unwrap();
    assert_eq!(night_list.colors()[0], Argb::rgb(223, 32, 32));

    switch.toggle();
    assert_eq!(*switch.resolve_color_state_list(BUTTON, None).unwrap(), button());
}

#[test]
fn themed_lookup_goes_through_overlay() {
    let night = DesaturatedResources::with_defaults(table(), true);
    let theme = ThemeOverlay::new().with_color(ACCENT, Argb::GREEN);
    let out = night.get_color_themed(ACCENT, Some(&theme)).unwrap();
    assert_eq!(out, Argb::rgb(32, 223, 32));
}

#[test]
fn unknown_resource_is_an_error() {
    let night = DesaturatedResources::with_defaults(table(), true);
    let missing = ResourceId(0xdead);
    assert_eq!(
        night.get_color(missing),
        Err(ResourceError::NotFound { id: missing })
    );
}

// ============================================================================
// Logging
// ============================================================================

/// Shape the view cannot take apart.
#[derive(Debug, PartialEq)]
struct Gradient;

impl StateList for Gradient {
    fn state_masks(&self) -> Result<Vec<StateMask>, ExtractError> {
        Err(ExtractError::unsupported("gradient"))
    }

    fn colors(&self) -> Result<Vec<Argb>, ExtractError> {
        Err(ExtractError::unsupported("gradient"))
    }

    fn from_parts(_: Vec<StateMask>, _: Vec<Argb>) -> Result<Self, ExtractError> {
        Err(ExtractError::unsupported("gradient"))
    }
}

struct GradientResolver;

impl ResourceResolver for GradientResolver {
    type Theme = ();
    type List = Gradient;

    fn resolve_color(&self, id: ResourceId, _: Option<&()>) -> Result<Argb, ResourceError> {
        Err(ResourceError::NotFound { id })
    }

    fn resolve_color_state_list(
        &self,
        _: ResourceId,
        _: Option<&()>,
    ) -> Result<Arc<Gradient>, ResourceError> {
        Ok(Arc::new(Gradient))
    }
}

#[test]
fn extraction_failure_warns_and_returns_raw() {
    let night = DesaturatedResources::with_defaults(GradientResolver, true);
    let (list, events) = with_captured_events(|| night.get_color_state_list(BUTTON).unwrap());

    assert_eq!(*list, Gradient);

    let warning = events
        .iter()
        .find(|e| e.level == tracing::Level::WARN)
        .expect("a warning should be emitted");
    assert!(warning.message.contains("desaturation failed"));
    assert_eq!(
        warning.fields.get("id").map(String::as_str),
        Some("0x7f060002")
    );
    assert!(warning.fields["error"].contains("gradient"));
}

#[test]
fn successful_desaturation_does_not_warn() {
    let night = DesaturatedResources::with_defaults(table(), true);
    let (_list, events) = with_captured_events(|| night.get_color_state_list(BUTTON).unwrap());
    assert!(events.iter().all(|e| e.level != tracing::Level::WARN));
    assert!(
        events
            .iter()
            .any(|e| e.message.contains("color state list desaturated"))
    );
}
