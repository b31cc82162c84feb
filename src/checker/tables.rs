//! Static rule tables shared by the checkers.
//!
//! Project-specific lists (role prefixes, exempt tokens, breakpoints) live in
//! [`crate::config`]; the tables here describe CSS itself.

/// Properties whose values carry a color.
pub const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "background",
    "background-color",
    "border",
    "border-color",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "border-inline-color",
    "border-block-color",
    "outline",
    "outline-color",
    "fill",
    "stroke",
    "box-shadow",
    "text-shadow",
    "text-decoration-color",
    "caret-color",
    "column-rule-color",
    "accent-color",
];

/// Keyword values that are allowed where a color is expected.
pub const ALLOWED_COLOR_KEYWORDS: &[&str] = &[
    "transparent",
    "inherit",
    "initial",
    "unset",
    "revert",
    "currentcolor",
    "none",
];

/// CSS named colors with their sRGB components.
pub const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("teal", (0, 128, 128)),
    ("navy", (0, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
    ("gold", (255, 215, 0)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("tomato", (255, 99, 71)),
    ("crimson", (220, 20, 60)),
    ("khaki", (240, 230, 140)),
    ("beige", (245, 245, 220)),
    ("ivory", (255, 255, 240)),
    ("lavender", (230, 230, 250)),
    ("tan", (210, 180, 140)),
    ("turquoise", (64, 224, 208)),
    ("orchid", (218, 112, 214)),
    ("plum", (221, 160, 221)),
    ("chocolate", (210, 105, 30)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("dimgray", (105, 105, 105)),
    ("dimgrey", (105, 105, 105)),
    ("gainsboro", (220, 220, 220)),
    ("whitesmoke", (245, 245, 245)),
    ("darkblue", (0, 0, 139)),
    ("lightblue", (173, 216, 230)),
    ("skyblue", (135, 206, 235)),
    ("steelblue", (70, 130, 180)),
    ("royalblue", (65, 105, 225)),
    ("dodgerblue", (30, 144, 255)),
    ("darkgreen", (0, 100, 0)),
    ("lightgreen", (144, 238, 144)),
    ("seagreen", (46, 139, 87)),
    ("darkred", (139, 0, 0)),
    ("firebrick", (178, 34, 34)),
    ("darkorange", (255, 140, 0)),
    ("slategray", (112, 128, 144)),
    ("slategrey", (112, 128, 144)),
    ("rebeccapurple", (102, 51, 153)),
];

/// Words that describe a literal color rather than a role when they appear in a
/// variable name.
pub const COLOR_WORDS: &[&str] = &[
    "red", "blue", "green", "gray", "grey", "white", "black", "yellow", "orange", "purple",
    "pink", "brown", "teal", "cyan", "navy", "silver", "gold", "indigo", "violet", "slate",
    "zinc", "neutral", "stone", "amber", "emerald", "sky", "rose", "lime",
];

/// Spacing properties (margin, padding, gap and their directional/logical variants).
pub const SPACING_PROPERTIES: &[&str] = &[
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "margin-inline",
    "margin-inline-start",
    "margin-inline-end",
    "margin-block",
    "margin-block-start",
    "margin-block-end",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "padding-inline",
    "padding-inline-start",
    "padding-inline-end",
    "padding-block",
    "padding-block-start",
    "padding-block-end",
    "gap",
    "row-gap",
    "column-gap",
    "grid-gap",
];

pub const RADIUS_PROPERTIES: &[&str] = &[
    "border-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-start-start-radius",
    "border-start-end-radius",
    "border-end-start-radius",
    "border-end-end-radius",
];

/// Radius values that express a shape rather than a size.
pub const RADIUS_SHAPE_VALUES: &[&str] = &["50%", "100%"];

/// Properties that may carry durations.
pub const DURATION_PROPERTIES: &[&str] = &[
    "transition",
    "transition-duration",
    "transition-delay",
    "animation",
    "animation-duration",
    "animation-delay",
];

/// Properties that may carry easing functions.
pub const EASING_PROPERTIES: &[&str] = &[
    "transition",
    "transition-timing-function",
    "animation",
    "animation-timing-function",
];

pub const EASING_KEYWORDS: &[&str] = &["ease", "ease-in", "ease-out", "ease-in-out", "linear"];

pub const EASING_FUNCTIONS: &[&str] = &["cubic-bezier", "steps"];

/// Properties that put an element in motion.
pub const MOTION_PROPERTIES: &[&str] = &[
    "animation",
    "animation-name",
    "transition",
    "transition-property",
    "transform",
];

/// Element names that receive keyboard focus.
pub const INTERACTIVE_ELEMENTS: &[&str] = &["button", "a", "input", "select", "textarea"];

/// Attribute selectors that make an element interactive.
pub const INTERACTIVE_ATTRIBUTES: &[&str] = &["[role=\"button\"]", "[role=button]", "[tabindex]"];

/// Class-name fragments that mark a class as a button.
pub const BUTTON_CLASS_HINTS: &[&str] = &["btn", "button"];

/// Class-name fragments that make a class look tappable.
pub const TOUCH_TARGET_HINTS: &[&str] = &[
    "btn", "button", "link", "toggle", "tab", "chip", "close", "icon",
];

pub const SIZE_PROPERTIES: &[&str] = &["width", "height", "min-width", "min-height"];

pub const FOCUS_PSEUDO_CLASSES: &[&str] = &[":focus-visible", ":focus-within", ":focus"];

/// Properties that can provide a visible replacement for a removed focus outline.
pub const VISIBLE_FOCUS_PROPERTIES: &[&str] = &[
    "box-shadow",
    "border",
    "border-color",
    "border-bottom",
    "outline",
    "outline-color",
    "outline-style",
    "outline-width",
    "background",
    "background-color",
    "text-decoration",
];

/// Vendor-prefixed properties that every supported browser handles unprefixed.
pub const UNNECESSARY_VENDOR_PROPERTIES: &[&str] = &[
    "-webkit-border-radius",
    "-moz-border-radius",
    "-webkit-box-shadow",
    "-moz-box-shadow",
    "-webkit-transition",
    "-moz-transition",
    "-o-transition",
    "-webkit-transform",
    "-moz-transform",
    "-ms-transform",
    "-o-transform",
    "-webkit-animation",
    "-moz-animation",
    "-o-animation",
    "-webkit-box-sizing",
    "-moz-box-sizing",
    "-webkit-flex",
    "-ms-flex",
    "-webkit-flex-direction",
    "-ms-flex-direction",
    "-webkit-justify-content",
    "-webkit-align-items",
    "-moz-opacity",
    "-webkit-opacity",
    "-webkit-background-clip",
    "-moz-background-clip",
    "-webkit-background-size",
    "-moz-background-size",
];

/// Class-name prefixes that mark a utility class.
pub const UTILITY_PREFIXES: &[&str] = &[
    "m-", "mt-", "mr-", "mb-", "ml-", "mx-", "my-", "p-", "pt-", "pr-", "pb-", "pl-", "px-",
    "py-", "gap-", "text-", "bg-", "u-", "is-", "has-", "d-", "w-", "h-", "flex", "grid",
];

/// Class names that are utilities regardless of prefix.
pub const UTILITY_NAMES: &[&str] = &["sr-only", "visually-hidden", "hidden", "clearfix"];
