//! Element namespaces and foreign-content name adjustment.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The namespace of an element or attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Namespace {
    #[default]
    Html,
    MathMl,
    Svg,
    XLink,
    Xml,
    XmlNs,
}

impl Namespace {
    /// The namespace URI.
    pub fn uri(&self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
            Namespace::Svg => "http://www.w3.org/2000/svg",
            Namespace::XLink => "http://www.w3.org/1999/xlink",
            Namespace::Xml => "http://www.w3.org/XML/1998/namespace",
            Namespace::XmlNs => "http://www.w3.org/2000/xmlns/",
        }
    }

    /// Looks up a namespace by URI.
    pub fn from_uri(uri: &str) -> Option<Self> {
        [
            Namespace::Html,
            Namespace::MathMl,
            Namespace::Svg,
            Namespace::XLink,
            Namespace::Xml,
            Namespace::XmlNs,
        ]
        .into_iter()
        .find(|ns| ns.uri() == uri)
    }

    /// Returns true for SVG and MathML.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Namespace::Svg | Namespace::MathMl)
    }
}

static SVG_ELEMENT_NAMES: &[&str] = &[
    "altGlyph",
    "altGlyphDef",
    "altGlyphItem",
    "animateColor",
    "animateMotion",
    "animateTransform",
    "clipPath",
    "feBlend",
    "feColorMatrix",
    "feComponentTransfer",
    "feComposite",
    "feConvolveMatrix",
    "feDiffuseLighting",
    "feDisplacementMap",
    "feDistantLight",
    "feDropShadow",
    "feFlood",
    "feFuncA",
    "feFuncB",
    "feFuncG",
    "feFuncR",
    "feGaussianBlur",
    "feImage",
    "feMerge",
    "feMergeNode",
    "feMorphology",
    "feOffset",
    "fePointLight",
    "feSpecularLighting",
    "feSpotLight",
    "feTile",
    "feTurbulence",
    "foreignObject",
    "glyphRef",
    "linearGradient",
    "radialGradient",
    "textPath",
];

static SVG_ATTRIBUTE_NAMES: &[&str] = &[
    "attributeName",
    "attributeType",
    "baseFrequency",
    "baseProfile",
    "calcMode",
    "clipPathUnits",
    "diffuseConstant",
    "edgeMode",
    "filterUnits",
    "glyphRef",
    "gradientTransform",
    "gradientUnits",
    "kernelMatrix",
    "kernelUnitLength",
    "keyPoints",
    "keySplines",
    "keyTimes",
    "lengthAdjust",
    "limitingConeAngle",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "maskContentUnits",
    "maskUnits",
    "numOctaves",
    "pathLength",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "pointsAtX",
    "pointsAtY",
    "pointsAtZ",
    "preserveAlpha",
    "preserveAspectRatio",
    "primitiveUnits",
    "refX",
    "refY",
    "repeatCount",
    "repeatDur",
    "requiredExtensions",
    "requiredFeatures",
    "specularConstant",
    "specularExponent",
    "spreadMethod",
    "startOffset",
    "stdDeviation",
    "stitchTiles",
    "surfaceScale",
    "systemLanguage",
    "tableValues",
    "targetX",
    "targetY",
    "textLength",
    "viewBox",
    "viewTarget",
    "xChannelSelector",
    "yChannelSelector",
    "zoomAndPan",
];

fn lowercase_table(names: &'static [&'static str]) -> FxHashMap<String, &'static str> {
    names
        .iter()
        .map(|name| (name.to_ascii_lowercase(), *name))
        .collect()
}

static SVG_ELEMENTS: Lazy<FxHashMap<String, &'static str>> =
    Lazy::new(|| lowercase_table(SVG_ELEMENT_NAMES));
static SVG_ATTRIBUTES: Lazy<FxHashMap<String, &'static str>> =
    Lazy::new(|| lowercase_table(SVG_ATTRIBUTE_NAMES));

/// Normalizes an element name for its namespace.
///
/// HTML names are lowercased; SVG names are lowercased and then restored to
/// their camel-case spelling; MathML names are kept as written.
pub fn adjust_element_name(raw_name: &str, namespace: Namespace) -> String {
    match namespace {
        Namespace::Html => raw_name.to_ascii_lowercase(),
        Namespace::Svg => {
            let lower = raw_name.to_ascii_lowercase();
            match SVG_ELEMENTS.get(&lower) {
                Some(name) => (*name).to_string(),
                None => lower,
            }
        }
        _ => raw_name.to_string(),
    }
}

/// Normalizes an attribute name for the namespace of its element.
pub fn adjust_attribute_name(raw_name: &str, namespace: Namespace) -> String {
    let lower = raw_name.to_ascii_lowercase();
    match namespace {
        Namespace::Svg => match SVG_ATTRIBUTES.get(&lower) {
            Some(name) => (*name).to_string(),
            None => lower,
        },
        Namespace::MathMl if lower == "definitionurl" => "definitionURL".to_string(),
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_uri_round_trip() {
        assert_eq!(
            Namespace::from_uri("http://www.w3.org/2000/svg"),
            Some(Namespace::Svg)
        );
        assert_eq!(Namespace::from_uri("urn:nothing"), None);
    }

    #[test]
    fn test_svg_names() {
        assert_eq!(
            adjust_element_name("FOREIGNOBJECT", Namespace::Svg),
            "foreignObject"
        );
        assert_eq!(adjust_element_name("Circle", Namespace::Svg), "circle");
        assert_eq!(adjust_attribute_name("viewbox", Namespace::Svg), "viewBox");
    }

    #[test]
    fn test_html_and_mathml_names() {
        assert_eq!(adjust_element_name("DIV", Namespace::Html), "div");
        assert_eq!(adjust_element_name("mRow", Namespace::MathMl), "mRow");
        assert_eq!(
            adjust_attribute_name("DefinitionUrl", Namespace::MathMl),
            "definitionURL"
        );
        assert_eq!(adjust_attribute_name(":FooBar", Namespace::Html), ":foobar");
    }
}
