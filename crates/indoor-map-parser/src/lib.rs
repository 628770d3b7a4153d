// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indoor-Map Parser - Listener-driven parser for XML indoor maps
//!
//! This crate reads indoor map documents into the model defined in
//! `indoor-map-model` and implements its [`IndoorParser`] trait.
//!
//! # Features
//!
//! - **DOM parsing** using `roxmltree`
//! - **Lenient attribute decoding** using `lexical-core`; bad values fall back to defaults
//! - **Listener callbacks** at every entity boundary, with subtree pruning
//! - **Wall segmentation** into wall, door and window pieces
//!
//! # Example
//!
//! ```ignore
//! use indoor_map_parser::MapParser;
//! use indoor_map_model::{IndoorListener, IndoorParser, Wall};
//!
//! let map = MapParser::new().parse(xml)?;
//! println!("Found {} floors", map.floors.len());
//!
//! // Or observe the traversal
//! struct WallCounter(usize);
//!
//! impl IndoorListener for WallCounter {
//!     fn leave_wall(&mut self, _wall: &mut Wall) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = WallCounter(0);
//! MapParser::new().read_from_file("building.xml", &mut counter)?;
//! ```

mod decoder;
mod walker;

pub use decoder::{parse_float_prefix, parse_int_prefix, AttributeDecoder};
pub use walker::ROOT_ELEMENT;

use indoor_map_model::{IndoorListener, IndoorParser, Map, MapCollector, ParseError, Result, Wall};
use log::error;
use roxmltree::Document;
use std::io::ErrorKind;
use std::path::Path;
use walker::Walker;

/// Main XML map parser implementing `IndoorParser`
///
/// The parser only holds configuration. Every call builds its own traversal
/// state, so one parser can serve many sequential or concurrent calls.
#[derive(Clone, Debug)]
pub struct MapParser {
    /// Wall thickness used when a wall has no usable `thickness` attribute
    pub default_wall_thickness: f32,
}

impl Default for MapParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MapParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self {
            default_wall_thickness: Wall::DEFAULT_THICKNESS,
        }
    }

    /// Set the fallback wall thickness
    pub fn with_default_wall_thickness(mut self, thickness: f32) -> Self {
        self.default_wall_thickness = thickness;
        self
    }

    /// Read a map file and walk it with `listener`
    pub fn read_from_file(
        &self,
        path: impl AsRef<Path>,
        listener: &mut dyn IndoorListener,
    ) -> Result<()> {
        let content = read_source(path.as_ref())?;
        self.parse_with_listener(&content, listener)
    }

    /// Read a map file into a `Map`
    pub fn read_map_from_file(&self, path: impl AsRef<Path>) -> Result<Map> {
        let mut collector = MapCollector::new();
        self.read_from_file(path, &mut collector)?;
        collector
            .into_map()
            .ok_or_else(|| ParseError::other("Traversal finished without a map"))
    }
}

impl IndoorParser for MapParser {
    fn parse_with_listener(
        &self,
        content: &str,
        listener: &mut dyn IndoorListener,
    ) -> Result<()> {
        let doc = Document::parse(content).map_err(|e| {
            error!("XML parser error: {}", e);
            ParseError::xml(e.to_string())
        })?;

        Walker::new(listener, self.default_wall_thickness)
            .walk(&doc)
            .inspect_err(|e| error!("{}", e))
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        let err = match e.kind() {
            ErrorKind::NotFound => ParseError::file_not_found(path),
            _ => ParseError::Io(e),
        };
        error!("{}", err);
        err
    })
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<Map> {
    MapParser::new().parse(content)
}

/// Read a map file with default settings
pub fn parse_file(path: impl AsRef<Path>) -> Result<Map> {
    MapParser::new().read_map_from_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<map width="10" depth="5"><floors/></map>"#;

    #[test]
    fn test_parse_minimal() {
        let map = parse(MINIMAL).unwrap();
        assert_eq!(map.width, 10.0);
        assert_eq!(map.depth, 5.0);
        assert!(map.floors.is_empty());
        assert!(map.earth_registration.is_empty());
    }

    #[test]
    fn test_builder() {
        let parser = MapParser::new().with_default_wall_thickness(0.3);
        assert_eq!(parser.default_wall_thickness, 0.3);
        assert_eq!(MapParser::default().default_wall_thickness, 0.15);
    }

    #[test]
    fn test_malformed_xml() {
        let result = parse("<map width='1'><floors></map>");
        assert!(matches!(result, Err(ParseError::InvalidXml(_))));
    }

    #[test]
    fn test_empty_document() {
        assert!(matches!(parse(""), Err(ParseError::InvalidXml(_))));
    }

    #[test]
    fn test_wrong_root() {
        let result = parse("<building><floors/></building>");
        match result {
            Err(ParseError::UnexpectedRoot { expected, found }) => {
                assert_eq!(expected, "map");
                assert_eq!(found, "building");
            }
            other => panic!("Expected UnexpectedRoot, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = parse_file("/definitely/not/here/map.xml");
        assert!(matches!(result, Err(ParseError::FileNotFound { .. })));
    }
}
