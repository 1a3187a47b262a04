//! OpenSCAD emitter for collected placements

use std::fmt::Write;

use crate::parser::{Placement, PlacementListing};

/// Emit the four fixed coordinate tables consumed by the case model
///
/// Switch and mount tables hold `[x,y]` pairs; the jack and receptacle
/// tables hold x values only. Entries keep scan order.
pub fn emit_scad(listing: &PlacementListing) -> String {
    let mut out = String::new();

    emit_center_table(&mut out, "kb_footprint_centers", &listing.switches);
    writeln!(out).unwrap();
    emit_center_table(&mut out, "kb_mount_centers", &listing.mounts);
    writeln!(out).unwrap();
    emit_x_table(&mut out, "audio_jack_x", &listing.audio_jacks);
    writeln!(out).unwrap();
    emit_x_table(&mut out, "usb_c_x", &listing.usb);

    out
}

impl PlacementListing {
    /// Convert the collected placements to OpenSCAD source
    pub fn to_scad(&self) -> String {
        emit_scad(self)
    }
}

fn emit_center_table(out: &mut String, name: &str, placements: &[Placement]) {
    writeln!(out, "function {name}() = [").unwrap();
    for p in placements {
        // Debug formatting keeps the trailing .0 on integral coordinates
        writeln!(out, "    [{:?},{:?}],", p.x, p.y).unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn emit_x_table(out: &mut String, name: &str, placements: &[Placement]) {
    writeln!(out, "function {name}() = [").unwrap();
    for p in placements {
        writeln!(out, "    {:?},", p.x).unwrap();
    }
    writeln!(out, "];").unwrap();
}
