use dioxus::prelude::*;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TooltipSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TooltipSize::Small => "small",
            TooltipSize::Medium => "medium",
            TooltipSize::Large => "large",
        }
    }
}

impl FromStr for TooltipSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(TooltipSize::Small),
            "medium" => Ok(TooltipSize::Medium),
            "large" => Ok(TooltipSize::Large),
            _ => Err(format!("Invalid tooltip size: {}", s)),
        }
    }
}

impl fmt::Display for TooltipSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual options of a tooltip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipStyle {
    pub placement: String,
    pub kind: Option<String>,
    pub size: TooltipSize,
    pub rounded: bool,
    pub always: bool,
    pub no_animate: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            placement: "bottom".to_string(),
            kind: None,
            size: TooltipSize::Medium,
            rounded: false,
            always: false,
            no_animate: false,
        }
    }
}

impl TooltipStyle {
    /// Class list applied to the wrapped element
    pub fn class_list(&self) -> String {
        let mut classes = vec!["tooltip".to_string(), format!("tooltip--{}", self.placement)];
        if let Some(kind) = self.kind.as_deref().filter(|k| !k.is_empty()) {
            classes.push(format!("tooltip--{}", kind));
        }
        classes.push(format!("tooltip--{}", self.size));
        if self.rounded {
            classes.push("tooltip--rounded".to_string());
        }
        if self.always {
            classes.push("tooltip--always".to_string());
        }
        if self.no_animate {
            classes.push("tooltip--no-animate".to_string());
        }
        classes.join(" ")
    }
}

/// Wraps its children with an `aria-label` tooltip
#[component]
pub fn Tooltip(
    label: String,
    #[props(default)] style: TooltipStyle,
    children: Element,
) -> Element {
    let classes = style.class_list();

    rsx! {
        span {
            class: "{classes}",
            aria_label: "{label}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        assert_eq!(TooltipStyle::default().class_list(), "tooltip tooltip--bottom tooltip--medium");
    }

    #[test]
    fn test_all_modifiers() {
        let style = TooltipStyle {
            placement: "right".to_string(),
            kind: Some("danger".to_string()),
            size: TooltipSize::Small,
            rounded: true,
            always: true,
            no_animate: true,
        };

        assert_eq!(
            style.class_list(),
            "tooltip tooltip--right tooltip--danger tooltip--small tooltip--rounded tooltip--always tooltip--no-animate"
        );
    }

    #[test]
    fn test_size_accepts_only_known_values() {
        assert_eq!("large".parse::<TooltipSize>(), Ok(TooltipSize::Large));
        assert!("huge".parse::<TooltipSize>().is_err());
    }
}
