// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core parser trait
//!
//! Parser backends implement [`IndoorParser`] so consumers can read maps
//! without depending on a concrete document format.

use crate::{IndoorListener, Map, MapCollector, ParseError, Result};

/// Main parsing interface - entry point for reading indoor maps
///
/// # Example
///
/// ```ignore
/// use indoor_map_model::IndoorParser;
///
/// let parser: Box<dyn IndoorParser> = get_parser();
/// let map = parser.parse(content)?;
/// println!("{} floors", map.floors.len());
/// ```
pub trait IndoorParser: Send + Sync {
    /// Walk the document, notifying `listener` at every entity boundary
    ///
    /// Fails without invoking any hook if the document cannot be parsed.
    fn parse_with_listener(&self, content: &str, listener: &mut dyn IndoorListener)
        -> Result<()>;

    /// Parse the document into a map
    fn parse(&self, content: &str) -> Result<Map> {
        let mut collector = MapCollector::new();
        self.parse_with_listener(content, &mut collector)?;
        collector
            .into_map()
            .ok_or_else(|| ParseError::other("Traversal finished without a map"))
    }
}
