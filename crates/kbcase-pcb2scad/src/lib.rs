//! Footprint placement to OpenSCAD exporter
//!
//! Scans the footprint placement listing exported from the PCB layout and
//! produces the OpenSCAD coordinate tables the keyboard case model includes:
//! key switch centers, mounting hole centers, and the connector x offsets.

pub mod emit;
pub mod mapping;
pub mod parser;

pub use emit::emit_scad;
pub use mapping::FootprintKind;
pub use parser::{Placement, PlacementListing, Scanner};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_to_scad() {
        let listing = PlacementListing::parse_str(
            "footprint Switch_Keyboard_Cherry_MX:SW_Cherry_MX_PCB\n\
             position 10.0 20.0 180\n\
             footprint MountingHole:MountingHole_2.2mm_M2\n\
             position 5.0 5.0 0\n\
             footprint Connector_Audio:Jack_TRRS_PJ320A\n\
             position 3.0 0.0 90\n",
        )
        .unwrap();

        let output = listing.to_scad();

        // Switch and mount centers as pairs
        assert!(output.contains("function kb_footprint_centers() = ["));
        assert!(output.contains("    [10.0,20.0],"));
        assert!(output.contains("function kb_mount_centers() = ["));
        assert!(output.contains("    [5.0,5.0],"));

        // Jack x only
        assert!(output.contains("function audio_jack_x() = ["));
        assert!(output.contains("    3.0,"));

        // No USB-C on this board
        assert!(output.contains("function usb_c_x() = [\n];"));
    }
}
