//! Static enclosure and component tables.
//!
//! Both catalogs are keyed by closed enums, so lookups are total: a key that
//! deserialized successfully always has an entry. Unknown keys are rejected when
//! a project file is parsed (see [`crate::project`]), never inside the engine.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Corner treatment of the enclosure body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Rounded,
    Sharp,
}

/// Physical dimensions of one enclosure model, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnclosureDescriptor {
    pub name: &'static str,
    /// Front face width.
    pub width_mm: f64,
    /// Front face height.
    pub height_mm: f64,
    /// Depth at the back edge (the full depth for non-tapered shapes).
    pub depth_mm: f64,
    pub corner_style: CornerStyle,
    /// Outer corner radius; zero for sharp corners.
    pub corner_radius_mm: f64,
    /// Depth at the front edge. Present only for trapezoidal (tapered) shapes.
    pub front_depth_mm: Option<f64>,
    /// Whether displayed face labels follow a 90° canvas rotation.
    pub rotates_labels: bool,
}

impl EnclosureDescriptor {
    #[must_use]
    pub fn is_trapezoidal(&self) -> bool {
        self.front_depth_mm.is_some()
    }

    /// Radius removed from each end of the adjoining faces.
    #[must_use]
    pub fn effective_corner_radius_mm(&self) -> f64 {
        match self.corner_style {
            CornerStyle::Rounded if !self.is_trapezoidal() => self.corner_radius_mm,
            _ => 0.0,
        }
    }
}

/// Enclosure model key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnclosureType {
    #[serde(rename = "1590A")]
    Hammond1590A,
    #[default]
    #[serde(rename = "1590B")]
    Hammond1590B,
    #[serde(rename = "125B")]
    Hammond125B,
    #[serde(rename = "1590BB")]
    Hammond1590BB,
    #[serde(rename = "1590XX")]
    Hammond1590XX,
    #[serde(rename = "1590DD")]
    Hammond1590DD,
    #[serde(rename = "1550B")]
    Hammond1550B,
    #[serde(rename = "wedge")]
    Wedge,
}

const ENC_1590A: EnclosureDescriptor = EnclosureDescriptor {
    name: "1590A",
    width_mm: 38.5,
    height_mm: 92.6,
    depth_mm: 31.0,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 4.0,
    front_depth_mm: None,
    rotates_labels: false,
};

const ENC_1590B: EnclosureDescriptor = EnclosureDescriptor {
    name: "1590B",
    width_mm: 60.0,
    height_mm: 112.0,
    depth_mm: 31.0,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 5.0,
    front_depth_mm: None,
    rotates_labels: false,
};

const ENC_125B: EnclosureDescriptor = EnclosureDescriptor {
    name: "125B",
    width_mm: 66.0,
    height_mm: 122.0,
    depth_mm: 39.5,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 5.0,
    front_depth_mm: None,
    rotates_labels: true,
};

const ENC_1590BB: EnclosureDescriptor = EnclosureDescriptor {
    name: "1590BB",
    width_mm: 94.0,
    height_mm: 119.5,
    depth_mm: 34.0,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 5.0,
    front_depth_mm: None,
    rotates_labels: true,
};

const ENC_1590XX: EnclosureDescriptor = EnclosureDescriptor {
    name: "1590XX",
    width_mm: 121.0,
    height_mm: 145.0,
    depth_mm: 39.0,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 6.0,
    front_depth_mm: None,
    rotates_labels: true,
};

const ENC_1590DD: EnclosureDescriptor = EnclosureDescriptor {
    name: "1590DD",
    width_mm: 188.0,
    height_mm: 120.0,
    depth_mm: 37.0,
    corner_style: CornerStyle::Rounded,
    corner_radius_mm: 6.0,
    front_depth_mm: None,
    rotates_labels: true,
};

const ENC_1550B: EnclosureDescriptor = EnclosureDescriptor {
    name: "1550B",
    width_mm: 64.0,
    height_mm: 114.5,
    depth_mm: 30.0,
    corner_style: CornerStyle::Sharp,
    corner_radius_mm: 0.0,
    front_depth_mm: None,
    rotates_labels: false,
};

const ENC_WEDGE: EnclosureDescriptor = EnclosureDescriptor {
    name: "Wedge",
    width_mm: 120.0,
    height_mm: 94.0,
    depth_mm: 52.0,
    corner_style: CornerStyle::Sharp,
    corner_radius_mm: 0.0,
    front_depth_mm: Some(28.0),
    rotates_labels: false,
};

impl EnclosureType {
    pub const ALL: [Self; 8] = [
        Self::Hammond1590A,
        Self::Hammond1590B,
        Self::Hammond125B,
        Self::Hammond1590BB,
        Self::Hammond1590XX,
        Self::Hammond1590DD,
        Self::Hammond1550B,
        Self::Wedge,
    ];

    /// Catalog entry for this key.
    #[must_use]
    pub fn descriptor(self) -> &'static EnclosureDescriptor {
        match self {
            Self::Hammond1590A => &ENC_1590A,
            Self::Hammond1590B => &ENC_1590B,
            Self::Hammond125B => &ENC_125B,
            Self::Hammond1590BB => &ENC_1590BB,
            Self::Hammond1590XX => &ENC_1590XX,
            Self::Hammond1590DD => &ENC_1590DD,
            Self::Hammond1550B => &ENC_1550B,
            Self::Wedge => &ENC_WEDGE,
        }
    }
}

impl std::str::FromStr for EnclosureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.descriptor().name.eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown enclosure `{s}`"))
    }
}

// =============================================================
// Components
// =============================================================

/// Outline used for drawing and hit-testing a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rectangle,
    Square,
}

/// Palette grouping. Footprint guides are placement aids and are never drilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Potentiometers,
    Jacks,
    Switches,
    #[serde(rename = "LEDs")]
    Leds,
    Connectors,
    #[serde(rename = "Footprint Guides")]
    FootprintGuides,
}

/// Catalog entry for one component type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentSpec {
    pub name: &'static str,
    /// Drill diameter for circular holes; zero for cutouts and guides.
    pub drill_mm: f64,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub shape: Shape,
    pub category: Category,
    pub imperial_label: &'static str,
}

impl ComponentSpec {
    #[must_use]
    pub fn is_footprint_guide(&self) -> bool {
        self.category == Category::FootprintGuides
    }

    /// `(width, height)` in millimeters for rectangular shapes, falling back to the
    /// drill size when a dimension is missing.
    #[must_use]
    pub fn rect_size_mm(&self) -> (f64, f64) {
        let w = self.width_mm.unwrap_or(self.drill_mm);
        let h = self.height_mm.unwrap_or(w);
        (w, h)
    }
}

/// Component type key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Pot16mm,
    Pot9mm,
    Jack635mm,
    DcJack,
    Footswitch3pdt,
    Led3mm,
    Led5mm,
    ToggleSwitch,
    RotarySwitch,
    UsbC,
    Pot16mmFootprint,
    JackFootprint,
    FootswitchFootprint,
}

const fn drill(name: &'static str, drill_mm: f64, category: Category, imperial_label: &'static str) -> ComponentSpec {
    ComponentSpec {
        name,
        drill_mm,
        width_mm: None,
        height_mm: None,
        shape: Shape::Circle,
        category,
        imperial_label,
    }
}

const fn outline(name: &'static str, width_mm: f64, height_mm: f64, shape: Shape, category: Category, imperial_label: &'static str) -> ComponentSpec {
    ComponentSpec {
        name,
        drill_mm: 0.0,
        width_mm: Some(width_mm),
        height_mm: Some(height_mm),
        shape,
        category,
        imperial_label,
    }
}

const POT_16MM: ComponentSpec = drill("16mm Pot", 7.0, Category::Potentiometers, "9/32\"");
const POT_9MM: ComponentSpec = drill("9mm Pot", 7.0, Category::Potentiometers, "9/32\"");
const JACK_635: ComponentSpec = drill("1/4\" Jack", 9.5, Category::Jacks, "3/8\"");
const DC_JACK: ComponentSpec = drill("DC Jack", 12.0, Category::Jacks, "15/32\"");
const FOOTSWITCH: ComponentSpec = drill("3PDT Footswitch", 12.0, Category::Switches, "15/32\"");
const LED_3MM: ComponentSpec = drill("3mm LED", 3.5, Category::Leds, "9/64\"");
const LED_5MM: ComponentSpec = drill("5mm LED", 5.2, Category::Leds, "13/64\"");
const TOGGLE: ComponentSpec = drill("Mini Toggle", 6.5, Category::Switches, "1/4\"");
const ROTARY: ComponentSpec = drill("Rotary Switch", 9.5, Category::Switches, "3/8\"");
const USB_C: ComponentSpec = outline("USB-C", 9.5, 4.0, Shape::Rectangle, Category::Connectors, "3/8\" x 5/32\"");
const POT_16MM_GUIDE: ComponentSpec =
    outline("16mm Pot Footprint", 17.0, 20.0, Shape::Rectangle, Category::FootprintGuides, "43/64\" x 25/32\"");
const JACK_GUIDE: ComponentSpec =
    outline("Jack Footprint", 18.0, 26.0, Shape::Rectangle, Category::FootprintGuides, "45/64\" x 1-1/64\"");
const FOOTSWITCH_GUIDE: ComponentSpec =
    outline("Footswitch Footprint", 17.0, 17.0, Shape::Square, Category::FootprintGuides, "43/64\"");

impl ComponentType {
    pub const ALL: [Self; 13] = [
        Self::Pot16mm,
        Self::Pot9mm,
        Self::Jack635mm,
        Self::DcJack,
        Self::Footswitch3pdt,
        Self::Led3mm,
        Self::Led5mm,
        Self::ToggleSwitch,
        Self::RotarySwitch,
        Self::UsbC,
        Self::Pot16mmFootprint,
        Self::JackFootprint,
        Self::FootswitchFootprint,
    ];

    /// Catalog entry for this key.
    #[must_use]
    pub fn spec(self) -> &'static ComponentSpec {
        match self {
            Self::Pot16mm => &POT_16MM,
            Self::Pot9mm => &POT_9MM,
            Self::Jack635mm => &JACK_635,
            Self::DcJack => &DC_JACK,
            Self::Footswitch3pdt => &FOOTSWITCH,
            Self::Led3mm => &LED_3MM,
            Self::Led5mm => &LED_5MM,
            Self::ToggleSwitch => &TOGGLE,
            Self::RotarySwitch => &ROTARY,
            Self::UsbC => &USB_C,
            Self::Pot16mmFootprint => &POT_16MM_GUIDE,
            Self::JackFootprint => &JACK_GUIDE,
            Self::FootswitchFootprint => &FOOTSWITCH_GUIDE,
        }
    }
}
