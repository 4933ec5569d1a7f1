//! Variant-to-class resolution for the component kit.
//!
//! Each component exposes its style axes (variant, size) as small enums. A recipe function
//! resolves one value per axis to the final utility-class string through a static lookup
//! table, so styling never depends on runtime dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Removes the browser default focus outline on keyboard focus.
pub const FOCUS: &str = "focus-visible:outline-none";
/// Removes the browser default focus outline on any focus.
pub const FOCUS_OUTLINE: &str = "focus:outline-none";
/// Disabled state for buttons.
pub const DISABLED: &str = "disabled:pointer-events-none disabled:opacity-50";
/// Disabled state for form fields.
pub const DISABLED_CURSOR: &str = "disabled:cursor-not-allowed disabled:opacity-50";
/// Subtle border change used by form inputs instead of a focus ring.
pub const INPUT_FOCUS: &str =
    "focus-visible:outline-none focus-visible:border-foreground hover:border-foreground/50";
/// Color-only transition.
pub const TRANSITION_COLORS: &str = "transition-colors";
/// Full transition.
pub const TRANSITION_ALL: &str = "transition-all duration-200";
/// Pointer cursor for clickable elements.
pub const CURSOR_POINTER: &str = "cursor-pointer";

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium";
const BADGE_BASE: &str =
    "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold";
const INPUT_BASE: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground";
const PAGINATION_LIST_BASE: &str = "flex items-center gap-1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while parsing variant tokens.
pub enum VariantError {
    /// The token does not name a value of the axis.
    #[error("unknown {axis} `{value}`")]
    Unknown {
        /// Axis being parsed, for example `button variant`.
        axis: &'static str,
        /// Rejected token.
        value: String,
    },
}

/// A closed set of styling values addressed by stable kebab-case tokens.
pub trait VariantAxis: Copy + Sized + 'static {
    /// Human-readable axis name used in error messages.
    const AXIS: &'static str;
    /// Every value of the axis in declaration order.
    const ALL: &'static [Self];

    /// Stable token used for `data-ui-*` attributes and serialized config.
    fn token(self) -> &'static str;

    /// Parses a token produced by [`VariantAxis::token`].
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::Unknown`] when no value of the axis uses `raw` as its token.
    fn parse_token(raw: &str) -> Result<Self, VariantError> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.token() == raw)
            .ok_or_else(|| VariantError::Unknown {
                axis: Self::AXIS,
                value: raw.to_string(),
            })
    }
}

macro_rules! impl_from_str {
    ($($axis:ty),* $(,)?) => {
        $(
            impl FromStr for $axis {
                type Err = VariantError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    Self::parse_token(raw)
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button color treatments.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Primary,
    /// Filled secondary action.
    Secondary,
    /// Transparent until hovered.
    Ghost,
    /// Bordered, transparent background.
    Outline,
    /// Filled destructive action.
    Destructive,
    /// Text link styling.
    Link,
    /// Tinted primary.
    SoftPrimary,
    /// Tinted secondary.
    SoftSecondary,
    /// Tinted success.
    SoftSuccess,
    /// Tinted warning.
    SoftWarning,
    /// Tinted destructive.
    SoftDestructive,
}

impl VariantAxis for ButtonVariant {
    const AXIS: &'static str = "button variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Ghost,
        Self::Outline,
        Self::Destructive,
        Self::Link,
        Self::SoftPrimary,
        Self::SoftSecondary,
        Self::SoftSuccess,
        Self::SoftWarning,
        Self::SoftDestructive,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Outline => "outline",
            Self::Destructive => "destructive",
            Self::Link => "link",
            Self::SoftPrimary => "soft-primary",
            Self::SoftSecondary => "soft-secondary",
            Self::SoftSuccess => "soft-success",
            Self::SoftWarning => "soft-warning",
            Self::SoftDestructive => "soft-destructive",
        }
    }
}

impl ButtonVariant {
    /// Class fragment for this variant.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-primary text-primary-foreground hover:bg-primary/90 active:bg-primary/80"
            }
            Self::Secondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80 active:bg-secondary/70"
            }
            Self::Ghost => {
                "bg-transparent text-foreground hover:bg-accent hover:text-accent-foreground active:bg-accent/80"
            }
            Self::Outline => {
                "bg-transparent border border-input text-foreground hover:bg-accent hover:text-accent-foreground hover:border-accent active:bg-accent/80"
            }
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90 active:bg-destructive/80"
            }
            Self::Link => {
                "bg-transparent text-primary underline-offset-4 hover:underline hover:text-primary/80"
            }
            Self::SoftPrimary => {
                "bg-primary/10 text-primary hover:bg-primary/20 active:bg-primary/30"
            }
            Self::SoftSecondary => {
                "bg-secondary/10 text-secondary-foreground hover:bg-secondary/20 active:bg-secondary/30"
            }
            Self::SoftSuccess => {
                "bg-green-500/10 text-green-600 hover:bg-green-500/20 active:bg-green-500/30 dark:text-green-400"
            }
            Self::SoftWarning => {
                "bg-yellow-500/10 text-yellow-600 hover:bg-yellow-500/20 active:bg-yellow-500/30 dark:text-yellow-400"
            }
            Self::SoftDestructive => {
                "bg-destructive/10 text-destructive hover:bg-destructive/20 active:bg-destructive/30"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing, including the square icon-only size.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl VariantAxis for ButtonSize {
    const AXIS: &'static str = "button size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Icon];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl ButtonSize {
    /// Class fragment for this size.
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-sm",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
            Self::Icon => "h-10 w-10",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Three-step size scale shared by badges, inputs, and pagination.
pub enum ControlSize {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl VariantAxis for ControlSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge color treatments.
pub enum BadgeVariant {
    /// Filled primary badge.
    #[default]
    Default,
    /// Filled secondary badge.
    Secondary,
    /// Filled destructive badge.
    Destructive,
    /// Border only.
    Outline,
    /// Filled success badge.
    Success,
    /// Filled warning badge.
    Warning,
}

impl VariantAxis for BadgeVariant {
    const AXIS: &'static str = "badge variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
        Self::Success,
        Self::Warning,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

impl BadgeVariant {
    /// Class fragment for this variant.
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-primary text-primary-foreground hover:bg-primary/80"
            }
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
            Self::Success => "border-transparent bg-green-500 text-white hover:bg-green-600",
            Self::Warning => "border-transparent bg-yellow-500 text-white hover:bg-yellow-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Text input treatments.
pub enum InputVariant {
    /// Standard input.
    #[default]
    Default,
    /// Input flagged with a validation error.
    Error,
}

impl VariantAxis for InputVariant {
    const AXIS: &'static str = "input variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Error];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
        }
    }
}

impl InputVariant {
    /// Class fragment for this variant.
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Error => "border-destructive",
        }
    }
}

impl_from_str!(ButtonVariant, ButtonSize, ControlSize, BadgeVariant, InputVariant);

/// Ordered, de-duplicated set of class tokens.
///
/// Fragments are split on whitespace; a token already present keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every token in `fragment`.
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        for token in fragment.split_whitespace() {
            if !self.tokens.iter().any(|existing| existing == token) {
                self.tokens.push(token.to_string());
            }
        }
        self
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, fragment: &str) -> &mut Self {
        if condition {
            self.push(fragment);
        }
        self
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// Whether no token has been added.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment);
        }
        list
    }
}

/// Joins class fragments, skipping blanks and repeated tokens.
pub fn cn<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<ClassList>().to_string()
}

/// Resolves the button class string.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    cn([
        BUTTON_BASE,
        TRANSITION_ALL,
        FOCUS,
        DISABLED,
        CURSOR_POINTER,
        variant.class(),
        size.class(),
    ])
}

/// Resolves the badge class string.
pub fn badge_classes(variant: BadgeVariant, size: ControlSize) -> String {
    let size_class = match size {
        ControlSize::Sm => "px-2 py-0.5 text-xs",
        ControlSize::Md => "px-2.5 py-0.5 text-xs",
        ControlSize::Lg => "px-3 py-1 text-sm",
    };
    cn([
        BADGE_BASE,
        TRANSITION_COLORS,
        FOCUS_OUTLINE,
        variant.class(),
        size_class,
    ])
}

/// Resolves the text-input class string; `error` forces [`InputVariant::Error`].
pub fn input_classes(variant: InputVariant, size: ControlSize, error: bool) -> String {
    let variant = if error { InputVariant::Error } else { variant };
    let size_class = match size {
        ControlSize::Sm => "h-8 px-2 text-xs",
        ControlSize::Md => "h-10 px-3 text-sm",
        ControlSize::Lg => "h-12 px-4 text-base",
    };
    cn([
        INPUT_BASE,
        TRANSITION_COLORS,
        INPUT_FOCUS,
        DISABLED_CURSOR,
        variant.class(),
        size_class,
    ])
}

/// Resolves the pagination list class string, sizing every nested button.
pub fn pagination_classes(size: ControlSize) -> String {
    let size_class = match size {
        ControlSize::Sm => "[&_button]:h-8 [&_button]:px-2 [&_button]:text-xs",
        ControlSize::Md => "[&_button]:h-10 [&_button]:px-3 [&_button]:text-sm",
        ControlSize::Lg => "[&_button]:h-12 [&_button]:px-4 [&_button]:text-base",
    };
    cn([PAGINATION_LIST_BASE, size_class])
}
