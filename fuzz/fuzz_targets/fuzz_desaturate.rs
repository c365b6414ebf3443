#![no_main]

use arbitrary::Arbitrary;
use dusk_color::{Argb, Desaturation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    color: u32,
    amount: f32,
    threshold: f32,
}

fuzz_target!(|input: Input| {
    let color = Argb::from_u32(input.color);
    let params = Desaturation::new(input.amount, input.threshold);

    // Parameters are always clamped into [0, 1].
    assert!((0.0..=1.0).contains(&params.amount()));
    assert!((0.0..=1.0).contains(&params.threshold()));

    let out = params.apply(color);
    assert_eq!(out.a(), color.a(), "alpha must survive desaturation");

    if color.is_transparent() {
        assert_eq!(out, color);
    }

    // A second pass with the same parameters must not panic either.
    let _ = params.apply(out);

    let hsl = out.to_hsl();
    assert!((0.0..=360.0).contains(&hsl.h));
    assert!((0.0..=1.0).contains(&hsl.s));
    assert!((0.0..=1.0).contains(&hsl.l));
});
