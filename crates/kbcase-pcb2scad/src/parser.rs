//! Parser for footprint placement listings

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::mapping::{classify_footprint, FootprintKind};

/// A placement center on the board, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// Collected footprint placements, grouped by category
///
/// Collections keep listing order; the case model relies on switch order
/// matching the layout.
#[derive(Debug, Default, PartialEq)]
pub struct PlacementListing {
    /// Key switch centers
    pub switches: Vec<Placement>,
    /// Mounting hole centers
    pub mounts: Vec<Placement>,
    /// TRRS jack placements (only x is exported)
    pub audio_jacks: Vec<Placement>,
    /// USB-C receptacle placements (only x is exported)
    pub usb: Vec<Placement>,
}

impl PlacementListing {
    /// Parse a placement listing file
    pub fn parse(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read placement listing: {}", path.display()))?;

        Self::parse_str(&content)
    }

    /// Parse a placement listing from string content
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut scanner = Scanner::new();

        for line in content.lines() {
            scanner.scan_line(line)?;
        }

        Ok(scanner.finish())
    }

    /// Check whether any placements were collected
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
            && self.mounts.is_empty()
            && self.audio_jacks.is_empty()
            && self.usb.is_empty()
    }

    fn collection_mut(&mut self, kind: FootprintKind) -> &mut Vec<Placement> {
        match kind {
            FootprintKind::Switch => &mut self.switches,
            FootprintKind::Mount => &mut self.mounts,
            FootprintKind::AudioJack => &mut self.audio_jacks,
            FootprintKind::UsbReceptacle => &mut self.usb,
        }
    }
}

/// Scan state: a footprint declaration arms the scanner, the next
/// position line consumes the armed category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Idle,
    Armed(FootprintKind),
}

/// Incremental line scanner over a placement listing
///
/// Feed lines in listing order with [`Scanner::scan_line`], then take the
/// collected placements with [`Scanner::finish`]. State carries across
/// lines, so multiple files can be scanned as one stream.
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    listing: PlacementListing,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of the listing
    ///
    /// A recognized footprint declaration arms the scanner (re-arming
    /// overwrites a pending category); an unrecognized one clears it.
    /// A position line is only read while armed, and always disarms.
    /// Every other line leaves the state untouched.
    pub fn scan_line(&mut self, line: &str) -> Result<()> {
        if line.starts_with("footprint") {
            match classify_footprint(line) {
                Some(kind) => {
                    debug!("armed {:?}: {}", kind, line.trim_end());
                    self.state = ScanState::Armed(kind);
                }
                None => {
                    warn!("untracked footprint declaration: {}", line.trim_end());
                    self.state = ScanState::Idle;
                }
            }
        } else if line.starts_with("position") {
            if let ScanState::Armed(kind) = self.state {
                let placement = parse_position(line)?;
                debug!("recorded {:?} at ({},{})", kind, placement.x, placement.y);
                self.listing.collection_mut(kind).push(placement);
                self.state = ScanState::Idle;
            }
        }

        Ok(())
    }

    /// Finish the scan and take the collected placements
    pub fn finish(self) -> PlacementListing {
        self.listing
    }
}

/// Read the x/y fields of a position line
///
/// Fields are single-space separated; x and y are the second and third
/// fields. Trailing fields (rotation, side) are ignored.
fn parse_position(line: &str) -> Result<Placement> {
    let mut fields = line.split(' ');
    let x = parse_coordinate(fields.nth(1), "x", line)?;
    let y = parse_coordinate(fields.next(), "y", line)?;

    Ok(Placement { x, y })
}

fn parse_coordinate(field: Option<&str>, axis: &str, line: &str) -> Result<f64> {
    let token = field.with_context(|| {
        format!(
            "Position line is missing the {axis} coordinate: {}",
            line.trim_end()
        )
    })?;

    token.trim().parse().with_context(|| {
        format!(
            "Invalid {axis} coordinate {token:?} in position line: {}",
            line.trim_end()
        )
    })
}
