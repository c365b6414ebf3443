#![no_main]

use arbitrary::Arbitrary;
use dusk_color::Argb;
use dusk_res::{
    ColorStateList, DesaturatedResources, ResourceId, ResourceTable, StateFlags, StateMask,
};
use libfuzzer_sys::fuzz_target;

const LIST: ResourceId = ResourceId(0x7f06_0000);

#[derive(Debug, Arbitrary)]
struct Row {
    required: u32,
    excluded: u32,
    color: u32,
}

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<Row>,
    queries: Vec<u32>,
    drop_between: bool,
}

fuzz_target!(|input: Input| {
    if input.rows.len() > 64 || input.queries.len() > 64 {
        return;
    }

    let raw = ColorStateList::from_rows(input.rows.iter().map(|row| {
        (
            StateMask::new(
                StateFlags::from_bits_truncate(row.required),
                StateFlags::from_bits_truncate(row.excluded),
            ),
            Argb::from_u32(row.color),
        )
    }));

    let res = DesaturatedResources::with_defaults(
        ResourceTable::new().with_list(LIST, raw.clone()),
        true,
    );
    let params = res.desaturation();

    let mut held = res.get_color_state_list(LIST).expect("list is registered");
    assert_eq!(held.states(), raw.states());

    for bits in &input.queries {
        let state = StateFlags::from_bits_truncate(*bits);
        let expected = params.apply(raw.color_for_state(state, Argb::TRANSPARENT));
        assert_eq!(held.color_for_state(state, Argb::TRANSPARENT), expected);

        if input.drop_between {
            drop(held);
            assert_eq!(res.live_entries(), 0);
            held = res.get_color_state_list(LIST).expect("list is registered");
        }
    }

    let stats = res.cache_stats();
    assert_eq!(stats.fallbacks, 0);
});
