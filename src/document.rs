//! SVG document scanning for exportable assets.
//!
//! A single streaming pass over the document collects the declared document
//! name, the top-level layer groups in document order, each layer's
//! immediate children, and the set of group ids (used to validate an icon
//! selection). Only Inkscape-style layers (`<g inkscape:groupmode="layer">`
//! directly under the root) are namespaces for asset discovery; deeper
//! nesting is ignored.

use std::collections::HashSet;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{DroidexError, Result};

/// One exportable asset discovered in a layer.
///
/// The id is the element's unique document id (passed to the rasterizer);
/// the label is the human-readable name used as the output filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub id: String,
    pub label: String,
}

/// An immediate child of a layer, before asset qualification.
#[derive(Debug, Clone, Default)]
pub struct ChildElement {
    pub id: Option<String>,
    pub label: Option<String>,
}

/// A top-level layer group.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// The layer's own display label, when present.
    pub label: Option<String>,
    /// Immediate children in document order.
    pub children: Vec<ChildElement>,
}

/// Parsed view of an SVG document, limited to what the export pipelines need.
#[derive(Debug, Default)]
pub struct Document {
    docname: Option<String>,
    layers: Vec<Layer>,
    group_ids: HashSet<String>,
}

impl Document {
    /// Load and scan a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path).map_err(|e| DroidexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read document: {}", e),
        })?;
        Self::parse(&xml)
    }

    /// Scan a document from an XML string.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut doc = Document::default();
        // Number of currently open elements; the element seen by a Start
        // event sits at this depth (root = 0, layers = 1, children = 2).
        let mut depth = 0usize;
        // Whether the currently open top-level group is a layer.
        let mut in_layer = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    doc.visit(&e, depth, &mut in_layer)?;
                    depth += 1;
                }
                Ok(Event::Empty(e)) => {
                    doc.visit(&e, depth, &mut in_layer)?;
                }
                Ok(Event::End(_)) => {
                    depth = depth.saturating_sub(1);
                    if depth <= 1 {
                        in_layer = false;
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(DroidexError::Document {
                        message: format!(
                            "Invalid SVG at byte {}: {}",
                            reader.buffer_position(),
                            e
                        ),
                        help: Some("Is this an SVG file saved by a vector editor?".to_string()),
                    })
                }
            }
        }

        Ok(doc)
    }

    fn visit(&mut self, e: &BytesStart, depth: usize, in_layer: &mut bool) -> Result<()> {
        if depth == 0 {
            self.docname = attr_value(e, b"sodipodi:docname")?;
            return Ok(());
        }

        let is_group = e.name().local_name().as_ref() == b"g";
        if is_group {
            if let Some(id) = attr_value(e, b"id")? {
                self.group_ids.insert(id);
            }
        }

        if depth == 1 {
            let is_layer = is_group
                && attr_value(e, b"inkscape:groupmode")?.as_deref() == Some("layer");
            *in_layer = is_layer;
            if is_layer {
                self.layers.push(Layer {
                    label: attr_value(e, b"inkscape:label")?,
                    children: Vec::new(),
                });
            }
        } else if depth == 2 && *in_layer {
            let child = ChildElement {
                id: attr_value(e, b"id")?,
                label: attr_value(e, b"inkscape:label")?,
            };
            if let Some(layer) = self.layers.last_mut() {
                layer.children.push(child);
            }
        }

        Ok(())
    }

    /// The document name declared by the editor, when present.
    pub fn docname(&self) -> Option<&str> {
        self.docname.as_deref()
    }

    /// Top-level layers in document order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Whether the given id refers to a group element anywhere in the document.
    pub fn is_group(&self, id: &str) -> bool {
        self.group_ids.contains(id)
    }

    /// The flat ordered asset list: layer order outer, child order inner.
    ///
    /// A child qualifies only when it carries both a non-empty id and a
    /// non-empty label; anything else is skipped silently.
    pub fn assets(&self) -> Vec<Asset> {
        self.layers
            .iter()
            .flat_map(|layer| layer.children.iter())
            .filter_map(|child| match (&child.id, &child.label) {
                (Some(id), Some(label)) if !id.is_empty() && !label.is_empty() => Some(Asset {
                    id: id.clone(),
                    label: label.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| DroidexError::Document {
            message: format!("Malformed attribute: {}", e),
            help: None,
        })?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(|e| DroidexError::Document {
                message: format!("Malformed attribute value: {}", e),
                help: None,
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_LAYERS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"
        xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
        xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.0.dtd"
        sodipodi:docname="icons.svg">
      <g inkscape:groupmode="layer" inkscape:label="Buttons" id="layer1">
        <rect id="rect1" inkscape:label="logo_a" width="10" height="10"/>
        <g id="group1" inkscape:label="logo_b">
          <circle id="nested1" inkscape:label="not_an_asset" r="4"/>
        </g>
        <rect id="rect2" width="5" height="5"/>
        <rect id="rect3" inkscape:label="" width="5" height="5"/>
      </g>
      <g id="plain-group">
        <rect id="rect4" inkscape:label="not_in_layer" width="1" height="1"/>
      </g>
      <g inkscape:groupmode="layer" inkscape:label="Badges" id="layer2">
        <path id="path1" inkscape:label="badge_new"/>
      </g>
      <g inkscape:groupmode="layer" inkscape:label="Empty" id="layer3"/>
    </svg>"#;

    #[test]
    fn test_docname() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        assert_eq!(doc.docname(), Some("icons.svg"));
    }

    #[test]
    fn test_layers_in_document_order() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        let labels: Vec<Option<&str>> =
            doc.layers().iter().map(|l| l.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("Buttons"), Some("Badges"), Some("Empty")]);
    }

    #[test]
    fn test_assets_layer_then_child_order() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        let assets = doc.assets();
        let labels: Vec<&str> = assets.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["logo_a", "logo_b", "badge_new"]);
        assert_eq!(assets[0].id, "rect1");
        assert_eq!(assets[2].id, "path1");
    }

    #[test]
    fn test_id_without_label_skipped() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        assert!(!doc.assets().iter().any(|a| a.id == "rect2"));
        assert!(!doc.assets().iter().any(|a| a.id == "rect3"));
    }

    #[test]
    fn test_nested_and_non_layer_children_excluded() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        assert!(!doc.assets().iter().any(|a| a.id == "nested1"));
        assert!(!doc.assets().iter().any(|a| a.id == "rect4"));
    }

    #[test]
    fn test_empty_layer_contributes_nothing() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        assert!(doc.layers()[2].children.is_empty());
    }

    #[test]
    fn test_group_id_lookup() {
        let doc = Document::parse(TWO_LAYERS).unwrap();
        assert!(doc.is_group("group1"));
        assert!(doc.is_group("layer1"));
        assert!(doc.is_group("plain-group"));
        assert!(!doc.is_group("rect1"));
        assert!(!doc.is_group("missing"));
    }

    #[test]
    fn test_no_docname() {
        let doc = Document::parse(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
        assert_eq!(doc.docname(), None);
        assert!(doc.assets().is_empty());
    }

    #[test]
    fn test_invalid_xml_is_an_error() {
        let err = Document::parse("<svg><g></svg>").unwrap_err();
        assert!(matches!(err, DroidexError::Document { .. }));
    }
}
