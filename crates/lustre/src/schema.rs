//! The customization schema: one table describing every known field.
//!
//! Each [`Field`] has a [`FieldSpec`] giving its configuration key, how its
//! string value is interpreted ([`FieldKind`]), the default used when the
//! value is absent or malformed, the range the editor offers, and the CSS unit
//! appended when the value is emitted as a length.
//!
//! Defaults are stored as strings, exactly as the editor stores them, so that
//! [`Customization::defaults`](crate::Customization::defaults) can be built
//! straight from this table and resolve to the same values.
//!
//! ```rust
//! use lustre::{Field, FieldKind};
//!
//! let spec = Field::ShadowIntensity.spec();
//! assert_eq!(spec.key, "shadowIntensity");
//! assert_eq!(spec.kind, FieldKind::Percent);
//! assert_eq!(spec.default_number(), 50.0);
//! assert_eq!(Field::from_key("shadowIntensity"), Some(Field::ShadowIntensity));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::resolve::number::{resolve_number_as, NumberStyle};

/// How a field's string value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A `#rrggbb` color, passed through as authored.
    Color,
    /// A base-10 integer parsed from the leading digits.
    Integer,
    /// An integer percentage; never resolves below zero.
    Percent,
    /// A decimal ratio such as a scale factor.
    Float,
    /// An opt-out boolean: only `"false"` is false.
    Flag,
    /// A string used verbatim (font family, font weight).
    Text,
}

impl FieldKind {
    /// Returns the numeric parsing style for numeric kinds.
    pub fn number_style(self) -> Option<NumberStyle> {
        match self {
            FieldKind::Integer | FieldKind::Percent => Some(NumberStyle::Integer),
            FieldKind::Float => Some(NumberStyle::Float),
            FieldKind::Color | FieldKind::Flag | FieldKind::Text => None,
        }
    }

    /// Returns `true` for kinds that resolve to a number.
    pub fn is_numeric(self) -> bool {
        self.number_style().is_some()
    }
}

/// CSS unit appended when a numeric field is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Ms,
    Deg,
    Seconds,
    None,
}

impl Unit {
    /// The unit suffix as written in CSS.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Ms => "ms",
            Unit::Deg => "deg",
            Unit::Seconds => "s",
            Unit::None => "",
        }
    }
}

/// Schema entry for one customization field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// The configuration key, e.g. `"glassOpacity"`.
    pub key: &'static str,
    pub kind: FieldKind,
    /// The default value as the editor stores it.
    pub default: &'static str,
    /// Inclusive `(min, max)` bounds offered by the editor, if any.
    pub range: Option<(f64, f64)>,
    pub unit: Unit,
}

impl FieldSpec {
    const fn color(key: &'static str, default: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Color,
            default,
            range: None,
            unit: Unit::None,
        }
    }

    const fn text(key: &'static str, default: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Text,
            default,
            range: None,
            unit: Unit::None,
        }
    }

    const fn flag(key: &'static str, default: &'static str) -> Self {
        Self {
            key,
            kind: FieldKind::Flag,
            default,
            range: None,
            unit: Unit::None,
        }
    }

    const fn number(
        key: &'static str,
        kind: FieldKind,
        default: &'static str,
        min: f64,
        max: f64,
        unit: Unit,
    ) -> Self {
        Self {
            key,
            kind,
            default,
            range: Some((min, max)),
            unit,
        }
    }

    const fn unbounded(
        key: &'static str,
        kind: FieldKind,
        default: &'static str,
        unit: Unit,
    ) -> Self {
        Self {
            key,
            kind,
            default,
            range: None,
            unit,
        }
    }

    /// The default parsed as a number; `0.0` for non-numeric kinds.
    pub fn default_number(&self) -> f64 {
        let style = self.kind.number_style().unwrap_or(NumberStyle::Float);
        resolve_number_as(Some(self.default), 0.0, style)
    }

    /// Clamps `value` into this field's range. Fields without a range are
    /// returned unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        match self.range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }

    /// Returns `true` if `value` lies inside the field's range.
    pub fn in_range(&self, value: f64) -> bool {
        match self.range {
            Some((min, max)) => (min..=max).contains(&value),
            None => true,
        }
    }
}

macro_rules! fields {
    ($($variant:ident => $spec:expr,)+) => {
        /// A known customization field.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant,)+
        }

        static SCHEMA: &[(Field, FieldSpec)] = &[
            $((Field::$variant, $spec),)+
        ];
    };
}

use FieldKind::{Float, Integer, Percent};

fields! {
    // Colors
    PrimaryColor => FieldSpec::color("primaryColor", "#10b981"),
    SecondaryColor => FieldSpec::color("secondaryColor", "#06b6d4"),
    BackgroundColor => FieldSpec::color("backgroundColor", "#0a0a0a"),
    SurfaceColor => FieldSpec::color("surfaceColor", "#1a1a1a"),
    TextColor => FieldSpec::color("textColor", "#f0fdf4"),

    // Typography
    FontFamily => FieldSpec::text("fontFamily", "Inter"),
    FontWeight => FieldSpec::text("fontWeight", "400"),
    FontSize => FieldSpec::number("fontSize", Integer, "16", 12.0, 24.0, Unit::Px),

    // Spacing
    Padding => FieldSpec::number("padding", Integer, "20", 0.0, 40.0, Unit::Px),
    Margin => FieldSpec::number("margin", Integer, "10", 0.0, 40.0, Unit::Px),
    BorderRadius => FieldSpec::number("borderRadius", Integer, "8", 0.0, 24.0, Unit::Px),

    // Effects
    Animation => FieldSpec::text("animation", "smooth"),
    Duration => FieldSpec::number("duration", Integer, "300", 100.0, 1000.0, Unit::Ms),
    ShadowIntensity => FieldSpec::number("shadowIntensity", Percent, "50", 0.0, 100.0, Unit::None),
    BlurAmount => FieldSpec::number("blurAmount", Integer, "12", 0.0, 24.0, Unit::Px),
    GlassOpacity => FieldSpec::number("glassOpacity", Percent, "15", 0.0, 100.0, Unit::None),
    GlassBorderOpacity => FieldSpec::number("glassBorderOpacity", Percent, "40", 10.0, 80.0, Unit::None),
    GradientAngle => FieldSpec::number("gradientAngle", Integer, "135", 0.0, 360.0, Unit::Deg),
    HoverScale => FieldSpec::number("hoverScale", Float, "1.05", 1.0, 1.2, Unit::None),
    NeoDepth => FieldSpec::number("neoDepth", Integer, "8", 2.0, 16.0, Unit::Px),
    SoftShadowIntensity => FieldSpec::number("softShadowIntensity", Percent, "20", 10.0, 50.0, Unit::None),
    GlowIntensity => FieldSpec::number("glowIntensity", Percent, "60", 20.0, 100.0, Unit::None),
    GlowSpread => FieldSpec::number("glowSpread", Integer, "40", 10.0, 80.0, Unit::Px),
    PulseSpeed => FieldSpec::number("pulseSpeed", Float, "2", 0.5, 4.0, Unit::Seconds),
    ParticleCount => FieldSpec::number("particleCount", Integer, "20", 5.0, 50.0, Unit::None),
    ExplosionRadius => FieldSpec::number("explosionRadius", Integer, "50", 20.0, 100.0, Unit::Px),
    FloatHeight => FieldSpec::number("floatHeight", Integer, "10", 5.0, 30.0, Unit::Px),
    RotationX => FieldSpec::number("rotationX", Integer, "5", 0.0, 15.0, Unit::Deg),
    RotationY => FieldSpec::number("rotationY", Integer, "5", 0.0, 15.0, Unit::Deg),

    // Motion and interaction
    FieldStagger => FieldSpec::unbounded("fieldStagger", Float, "0.1", Unit::Seconds),
    StepCount => FieldSpec::unbounded("stepCount", Integer, "3", Unit::None),
    ProgressStyle => FieldSpec::text("progressStyle", "bar"),
    NavPosition => FieldSpec::text("navPosition", "top"),
    NavSpacing => FieldSpec::unbounded("navSpacing", Integer, "20", Unit::Px),
    TrailLength => FieldSpec::number("trailLength", Integer, "8", 1.0, 15.0, Unit::None),
    CursorSize => FieldSpec::number("cursorSize", Integer, "20", 10.0, 40.0, Unit::Px),
    CursorBlendMode => FieldSpec::text("cursorBlendMode", "screen"),
    ParallaxSpeed => FieldSpec::number("parallaxSpeed", Float, "0.5", 0.1, 1.0, Unit::None),
    LayerCount => FieldSpec::number("layerCount", Integer, "3", 2.0, 5.0, Unit::None),
    ParallaxDirection => FieldSpec::text("parallaxDirection", "vertical"),
    // The editor slider offers 0.5x..2x, but the stored default is 300.
    AnimationSpeed => FieldSpec::unbounded("animationSpeed", Float, "300", Unit::None),

    // Component sizing
    SpinnerSize => FieldSpec::number("spinnerSize", Integer, "16", 12.0, 24.0, Unit::Px),
    IconSize => FieldSpec::number("iconSize", Integer, "24", 16.0, 40.0, Unit::Px),
    AvatarSize => FieldSpec::number("avatarSize", Integer, "80", 40.0, 120.0, Unit::Px),
    ImageHeight => FieldSpec::number("imageHeight", Integer, "200", 120.0, 300.0, Unit::Px),
    ExcerptLines => FieldSpec::number("excerptLines", Integer, "3", 1.0, 5.0, Unit::None),
    SidebarWidth => FieldSpec::number("sidebarWidth", Integer, "240", 180.0, 320.0, Unit::Px),
    CollapseWidth => FieldSpec::number("collapseWidth", Integer, "60", 50.0, 100.0, Unit::Px),
    ToastWidth => FieldSpec::number("toastWidth", Integer, "320", 280.0, 400.0, Unit::Px),
    InputHeight => FieldSpec::number("inputHeight", Integer, "40", 32.0, 56.0, Unit::Px),
    FocusRingWidth => FieldSpec::number("focusRingWidth", Integer, "2", 1.0, 4.0, Unit::Px),
    DataPointSize => FieldSpec::number("dataPointSize", Integer, "8", 4.0, 12.0, Unit::Px),
    IndicatorSize => FieldSpec::number("indicatorSize", Integer, "4", 2.0, 6.0, Unit::Px),
    HeaderHeight => FieldSpec::number("headerHeight", Integer, "64", 56.0, 96.0, Unit::Px),
    ColumnCount => FieldSpec::number("columnCount", Integer, "4", 2.0, 5.0, Unit::None),
    HeroHeight => FieldSpec::number("heroHeight", Integer, "600", 400.0, 700.0, Unit::Px),
    SectionPadding => FieldSpec::number("sectionPadding", Integer, "80", 40.0, 120.0, Unit::Px),
    QuoteSize => FieldSpec::number("quoteSize", Integer, "18", 16.0, 24.0, Unit::Px),
    FormWidth => FieldSpec::number("formWidth", Integer, "400", 300.0, 450.0, Unit::Px),
    // Either a pixel size or one of small / medium / large.
    BadgeSize => FieldSpec::text("badgeSize", "24"),

    // Modals
    BackdropOpacity => FieldSpec::number("backdropOpacity", Percent, "50", 0.0, 100.0, Unit::None),
    ModalScale => FieldSpec::number("modalScale", Percent, "100", 90.0, 100.0, Unit::None),

    // Code generation
    Framework => FieldSpec::text("framework", "react"),
    Styling => FieldSpec::text("styling", "tailwind"),

    // Flags
    ShowSuccessState => FieldSpec::flag("showSuccessState", "true"),
    ShowRating => FieldSpec::flag("showRating", "true"),
    ShowAuthor => FieldSpec::flag("showAuthor", "true"),
    ShowTrend => FieldSpec::flag("showTrend", "true"),
    ShowSocialLinks => FieldSpec::flag("showSocialLinks", "true"),
    ShowIcon => FieldSpec::flag("showIcon", "true"),
    ShowGrid => FieldSpec::flag("showGrid", "true"),
    ShowLabels => FieldSpec::flag("showLabels", "true"),
    ShowAvatar => FieldSpec::flag("showAvatar", "true"),
    ShowDivider => FieldSpec::flag("showDivider", "true"),
    ShowBadge => FieldSpec::flag("showBadge", "true"),
    ShowDecorations => FieldSpec::flag("showDecorations", "true"),
    ShowPopular => FieldSpec::flag("showPopular", "true"),
    ShowSocialLogin => FieldSpec::flag("showSocialLogin", "true"),
    Typescript => FieldSpec::flag("typescript", "true"),
    Responsive => FieldSpec::flag("responsive", "true"),
    DarkMode => FieldSpec::flag("darkMode", "true"),
    Accessibility => FieldSpec::flag("accessibility", "true"),
    Animations => FieldSpec::flag("animations", "true"),
    PulseAnimation => FieldSpec::flag("pulseAnimation", "false"),
}

static BY_KEY: Lazy<HashMap<&'static str, Field>> =
    Lazy::new(|| SCHEMA.iter().map(|(field, spec)| (spec.key, *field)).collect());

impl Field {
    /// Every known field, in schema order.
    pub fn all() -> impl Iterator<Item = Field> {
        SCHEMA.iter().map(|(field, _)| *field)
    }

    /// Looks up a field by its configuration key.
    pub fn from_key(key: &str) -> Option<Field> {
        BY_KEY.get(key).copied()
    }

    /// The schema entry for this field.
    pub fn spec(self) -> &'static FieldSpec {
        // SCHEMA is generated in declaration order, so the discriminant indexes it.
        &SCHEMA[self as usize].1
    }

    /// The configuration key for this field.
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
