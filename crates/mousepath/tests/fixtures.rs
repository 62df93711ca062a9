//! Named path/expected-stream pairs, checked with [`mousepath::compare`].
#![allow(missing_docs)]

mod common;

use mousepath::{CommandBuffer, Comparison, DEFAULT_CAPACITY, compare, translate};
use rstest::rstest;

#[rstest]
#[case::stop_only("S", "STOP")]
#[case::one_cell("FS", "FWD1, STOP")]
#[case::two_cells("FFS", "FWD2, STOP")]
#[case::exit_right("FRS", "FWD1, SS90ER, FWD1, STOP")]
#[case::exit_left("FLS", "FWD1, SS90EL, FWD1, STOP")]
#[case::corner_right("FFRFFS", "FWD2, SS90SR, FWD3, STOP")]
#[case::corner_left("FLFS", "FWD1, SS90SL, FWD2, STOP")]
#[case::u_turn_right("FRRFS", "FWD1, SS180R, FWD2, STOP")]
#[case::u_turn_left_at_goal("FLLS", "FWD1, SS180L, FWD1, STOP")]
#[case::short_diagonal("FRLS", "FWD1, SD45R, DIA2, DS45L, FWD1, STOP")]
#[case::short_diagonal_left("FLRFS", "FWD1, SD45L, DIA2, DS45R, FWD2, STOP")]
#[case::long_diagonal("FRLRLRLFS", "FWD1, SD45R, DIA6, DS45L, FWD2, STOP")]
#[case::wide_entry("FRRLFS", "FWD1, SD135R, DIA2, DS45L, FWD2, STOP")]
#[case::wide_entry_left("FLLRS", "FWD1, SD135L, DIA2, DS45R, FWD1, STOP")]
#[case::wide_exit("FRLLFFS", "FWD1, SD45R, DIA2, DS135L, FWD3, STOP")]
#[case::wide_exit_right("FLRRS", "FWD1, SD45L, DIA2, DS135R, FWD1, STOP")]
#[case::diagonal_corner("FRLLRLS", "FWD1, SD45R, DIA2, DD90L, DIA3, DS45L, FWD1, STOP")]
#[case::diagonal_corner_right("FLRRLFS", "FWD1, SD45L, DIA2, DD90R, DIA2, DS45L, FWD2, STOP")]
#[case::staircase(
    "FFRLRLLFFRFS",
    "FWD2, SD45R, DIA4, DS135L, FWD3, SS90SR, FWD2, STOP"
)]
#[case::empty("", "ERR_00, STOP")]
#[case::starts_with_turn("RFS", "ERR_00, STOP")]
#[case::starts_with_junk("?", "ERR_00, STOP")]
#[case::unterminated_run("FFF", "ERR_01, STOP")]
#[case::junk_after_right("FRX", "FWD1, ERR_02, STOP")]
#[case::junk_after_left("FL.", "FWD1, ERR_03, STOP")]
#[case::three_rights("FRRR", "FWD1, ERR_04, STOP")]
#[case::unterminated_diagonal("FRLR", "FWD1, SD45R, ERR_06, STOP")]
#[case::three_lefts("FLLLS", "FWD1, ERR_07, STOP")]
#[case::three_lefts_on_diagonal("FRLLL", "FWD1, SD45R, ERR_08, STOP")]
#[case::junk_after_two_rights_on_diagonal("FLRR?", "FWD1, SD45L, ERR_09, STOP")]
#[case::three_rights_on_diagonal("FLRRR", "FWD1, SD45L, ERR_15, STOP")]
fn translates_fixture(#[case] path: &str, #[case] listing: &str) {
    common::init_tracing();
    let expected = common::ops(listing);
    let mut out = CommandBuffer::<DEFAULT_CAPACITY>::new();
    translate(path, &mut out);

    let result = compare(&expected, out.as_slice(), DEFAULT_CAPACITY);
    assert_eq!(
        result,
        Comparison::Match,
        "{path:?} => {out}\n{}",
        common::side_by_side(&expected, &out)
    );
}
