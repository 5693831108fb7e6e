use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Declares one UI color category: the serde record holding its slots, its
/// built-in defaults and the field enum used to address a single slot.
/// Keys that are not known slots are carried in `extra` untouched.
macro_rules! ui_category {
    (
        $name:ident, $field_enum:ident, $category:literal {
            $($field:ident => $variant:ident, $key:literal, $default:literal;)+
        }
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(rename = $key)]
                pub $field: String,
            )+
            #[serde(flatten)]
            pub extra: BTreeMap<String, Value>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.to_string(),)+
                    extra: BTreeMap::new(),
                }
            }
        }

        impl $name {
            pub fn get(&self, field: $field_enum) -> &str {
                match field {
                    $($field_enum::$variant => &self.$field,)+
                }
            }

            fn get_mut(&mut self, field: $field_enum) -> &mut String {
                match field {
                    $($field_enum::$variant => &mut self.$field,)+
                }
            }
        }

        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
        pub enum $field_enum {
            $($variant,)+
        }

        impl $field_enum {
            pub const CATEGORY: &'static str = $category;

            pub fn key(self) -> &'static str {
                match self {
                    $($field_enum::$variant => $key,)+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                Self::iter().find(|field| field.key() == key)
            }
        }
    };
}

ui_category!(BadgeColors, BadgeField, "badge" {
    new => New, "new", "#10b981";
    sale => Sale, "sale", "#ef4444";
    hot => Hot, "hot", "#f97316";
    featured => Featured, "featured", "#8b5cf6";
    text => Text, "text", "#ffffff";
});

ui_category!(StatusColors, StatusField, "status" {
    success => Success, "success", "#10b981";
    warning => Warning, "warning", "#f59e0b";
    error => Error, "error", "#ef4444";
    info => Info, "info", "#3b82f6";
});

ui_category!(FormColors, FormField, "form" {
    input_background => InputBackground, "inputBackground", "#ffffff";
    input_border => InputBorder, "inputBorder", "#d1d5db";
    input_focus => InputFocus, "inputFocus", "#3b82f6";
    placeholder => Placeholder, "placeholder", "#9ca3af";
    label => Label, "label", "#374151";
});

ui_category!(NavColors, NavField, "nav" {
    background => Background, "background", "#ffffff";
    text => Text, "text", "#374151";
    active => Active, "active", "#2563eb";
    hover => Hover, "hover", "#f3f4f6";
});

ui_category!(CardColors, CardField, "card" {
    background => Background, "background", "#ffffff";
    border => Border, "border", "#e5e7eb";
    hover => Hover, "hover", "#f9fafb";
});

ui_category!(HeroColors, HeroField, "hero" {
    background => Background, "background", "#111827";
    text => Text, "text", "#ffffff";
    accent => Accent, "accent", "#60a5fa";
});

ui_category!(PaginationColors, PaginationField, "pagination" {
    background => Background, "background", "#ffffff";
    text => Text, "text", "#374151";
    active => Active, "active", "#2563eb";
    hover => Hover, "hover", "#f3f4f6";
});

ui_category!(LoadingColors, LoadingField, "loading" {
    spinner => Spinner, "spinner", "#3b82f6";
    skeleton => Skeleton, "skeleton", "#e5e7eb";
    track => Track, "track", "#f3f4f6";
});

ui_category!(AlertColors, AlertField, "alert" {
    success_background => SuccessBackground, "successBackground", "#ecfdf5";
    success_text => SuccessText, "successText", "#065f46";
    warning_background => WarningBackground, "warningBackground", "#fffbeb";
    warning_text => WarningText, "warningText", "#92400e";
    error_background => ErrorBackground, "errorBackground", "#fef2f2";
    error_text => ErrorText, "errorText", "#991b1b";
    info_background => InfoBackground, "infoBackground", "#eff6ff";
    info_text => InfoText, "infoText", "#1e40af";
});

/// Semantic colors that admins may override slot by slot. Unknown
/// categories from stored schemes are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiColors {
    pub badge: BadgeColors,
    pub status: StatusColors,
    pub form: FormColors,
    pub nav: NavColors,
    pub card: CardColors,
    pub hero: HeroColors,
    pub pagination: PaginationColors,
    pub loading: LoadingColors,
    pub alert: AlertColors,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Address of a single UI color: one variant per category, wrapping that
/// category's field enum. Parses from and displays as `category.field`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UiSlot {
    Badge(BadgeField),
    Status(StatusField),
    Form(FormField),
    Nav(NavField),
    Card(CardField),
    Hero(HeroField),
    Pagination(PaginationField),
    Loading(LoadingField),
    Alert(AlertField),
}

impl UiSlot {
    pub fn category(self) -> &'static str {
        match self {
            UiSlot::Badge(_) => BadgeField::CATEGORY,
            UiSlot::Status(_) => StatusField::CATEGORY,
            UiSlot::Form(_) => FormField::CATEGORY,
            UiSlot::Nav(_) => NavField::CATEGORY,
            UiSlot::Card(_) => CardField::CATEGORY,
            UiSlot::Hero(_) => HeroField::CATEGORY,
            UiSlot::Pagination(_) => PaginationField::CATEGORY,
            UiSlot::Loading(_) => LoadingField::CATEGORY,
            UiSlot::Alert(_) => AlertField::CATEGORY,
        }
    }

    pub fn field(self) -> &'static str {
        match self {
            UiSlot::Badge(f) => f.key(),
            UiSlot::Status(f) => f.key(),
            UiSlot::Form(f) => f.key(),
            UiSlot::Nav(f) => f.key(),
            UiSlot::Card(f) => f.key(),
            UiSlot::Hero(f) => f.key(),
            UiSlot::Pagination(f) => f.key(),
            UiSlot::Loading(f) => f.key(),
            UiSlot::Alert(f) => f.key(),
        }
    }

    /// Every slot, grouped by category in declaration order.
    pub fn all() -> Vec<UiSlot> {
        BadgeField::iter()
            .map(UiSlot::Badge)
            .chain(StatusField::iter().map(UiSlot::Status))
            .chain(FormField::iter().map(UiSlot::Form))
            .chain(NavField::iter().map(UiSlot::Nav))
            .chain(CardField::iter().map(UiSlot::Card))
            .chain(HeroField::iter().map(UiSlot::Hero))
            .chain(PaginationField::iter().map(UiSlot::Pagination))
            .chain(LoadingField::iter().map(UiSlot::Loading))
            .chain(AlertField::iter().map(UiSlot::Alert))
            .collect()
    }
}

impl Display for UiSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.category(), self.field())
    }
}

impl FromStr for UiSlot {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ThemeError::UnknownColorSlot(s.to_string());
        let (category, field) = s.split_once('.').ok_or_else(unknown)?;

        let slot = match category {
            BadgeField::CATEGORY => BadgeField::from_key(field).map(UiSlot::Badge),
            StatusField::CATEGORY => StatusField::from_key(field).map(UiSlot::Status),
            FormField::CATEGORY => FormField::from_key(field).map(UiSlot::Form),
            NavField::CATEGORY => NavField::from_key(field).map(UiSlot::Nav),
            CardField::CATEGORY => CardField::from_key(field).map(UiSlot::Card),
            HeroField::CATEGORY => HeroField::from_key(field).map(UiSlot::Hero),
            PaginationField::CATEGORY => PaginationField::from_key(field).map(UiSlot::Pagination),
            LoadingField::CATEGORY => LoadingField::from_key(field).map(UiSlot::Loading),
            AlertField::CATEGORY => AlertField::from_key(field).map(UiSlot::Alert),
            _ => None,
        };

        slot.ok_or_else(unknown)
    }
}

impl UiColors {
    pub fn get(&self, slot: UiSlot) -> &str {
        match slot {
            UiSlot::Badge(f) => self.badge.get(f),
            UiSlot::Status(f) => self.status.get(f),
            UiSlot::Form(f) => self.form.get(f),
            UiSlot::Nav(f) => self.nav.get(f),
            UiSlot::Card(f) => self.card.get(f),
            UiSlot::Hero(f) => self.hero.get(f),
            UiSlot::Pagination(f) => self.pagination.get(f),
            UiSlot::Loading(f) => self.loading.get(f),
            UiSlot::Alert(f) => self.alert.get(f),
        }
    }

    pub(crate) fn get_mut(&mut self, slot: UiSlot) -> &mut String {
        match slot {
            UiSlot::Badge(f) => self.badge.get_mut(f),
            UiSlot::Status(f) => self.status.get_mut(f),
            UiSlot::Form(f) => self.form.get_mut(f),
            UiSlot::Nav(f) => self.nav.get_mut(f),
            UiSlot::Card(f) => self.card.get_mut(f),
            UiSlot::Hero(f) => self.hero.get_mut(f),
            UiSlot::Pagination(f) => self.pagination.get_mut(f),
            UiSlot::Loading(f) => self.loading.get_mut(f),
            UiSlot::Alert(f) => self.alert.get_mut(f),
        }
    }
}
