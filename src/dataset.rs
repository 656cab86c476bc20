use indexmap::IndexMap;
use serde::Serialize;

/// Description stored for attributes whose detail page gave nothing usable.
pub const PLACEHOLDER_DESCRIPTION: &str = "?????";

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRecord {
    /// Key in [`Dataset::attributes`]; not repeated in the serialized record.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub attributes: IndexMap<String, AttributeRecord>,
    pub elements: IndexMap<String, Vec<String>>,
}

impl Dataset {
    /// Build the dataset from records in discovery order. A repeated name
    /// keeps its first slot and takes the later record.
    pub fn build(records: impl IntoIterator<Item = AttributeRecord>) -> Self {
        let mut attributes = IndexMap::new();
        for record in records {
            attributes.insert(record.name.clone(), record);
        }
        let elements = invert(&attributes);
        Self { attributes, elements }
    }

    /// Pretty JSON with 4-space indentation and a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Map each element to the attributes it supports, e.g. `{circle: [cx, cy]}`.
///
/// Attribute order follows `attributes`; an attribute is listed once per element.
pub fn invert(attributes: &IndexMap<String, AttributeRecord>) -> IndexMap<String, Vec<String>> {
    let mut by_element: IndexMap<String, Vec<String>> = IndexMap::new();
    for (name, record) in attributes {
        for element in &record.elements {
            let names = by_element.entry(element.clone()).or_default();
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    by_element
}

// ── Tests ──
