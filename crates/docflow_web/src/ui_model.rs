//! UI metadata and formatting that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! labels, ids and date rendering on the host.

use chrono::{DateTime, TimeZone};
use docflow::app::DocflowApp;
use docflow::categories::CategoryFlags;

pub const APP_TITLE: &str = "DocFlow";
pub const APP_SUBTITLE: &str = "Автозаполнение транспортных накладных";

/// `ru-RU` short date, e.g. `07.03.2026`.
pub fn format_upload_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d.%m.%Y").to_string()
}

/// `ru-RU` date and time, e.g. `07.03.2026, 09:05:01`.
pub fn format_upload_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d.%m.%Y, %H:%M:%S").to_string()
}

pub fn document_item_class(selected: bool) -> &'static str {
    if selected {
        "doc-item selected"
    } else {
        "doc-item"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCheckbox {
    WarehouseReceipt,
    Smr,
    Ttn,
}

impl CategoryCheckbox {
    pub fn id(self) -> &'static str {
        match self {
            CategoryCheckbox::WarehouseReceipt => "warehouse",
            CategoryCheckbox::Smr => "smr",
            CategoryCheckbox::Ttn => "ttn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryCheckbox::WarehouseReceipt => "Складская квитанция",
            CategoryCheckbox::Smr => "СМР",
            CategoryCheckbox::Ttn => "ТТН",
        }
    }

    pub fn is_checked(self, flags: CategoryFlags) -> bool {
        match self {
            CategoryCheckbox::WarehouseReceipt => flags.warehouse_receipt,
            CategoryCheckbox::Smr => flags.smr(),
            CategoryCheckbox::Ttn => flags.ttn(),
        }
    }

    pub fn apply(self, app: &mut DocflowApp, checked: bool) {
        match self {
            CategoryCheckbox::WarehouseReceipt => app.set_warehouse_receipt(checked),
            CategoryCheckbox::Smr => app.set_smr(checked),
            CategoryCheckbox::Ttn => app.set_ttn(checked),
        }
    }

    pub fn all() -> &'static [CategoryCheckbox] {
        &[
            CategoryCheckbox::WarehouseReceipt,
            CategoryCheckbox::Smr,
            CategoryCheckbox::Ttn,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Subscription,
    Logout,
}

impl UserMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            UserMenuItem::Subscription => "Подписка",
            UserMenuItem::Logout => "Выйти",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            UserMenuItem::Subscription => "💳",
            UserMenuItem::Logout => "🚪",
        }
    }

    pub fn all() -> &'static [UserMenuItem] {
        &[UserMenuItem::Subscription, UserMenuItem::Logout]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use docflow::config::DocflowConfig;

    #[test]
    fn dates_render_like_ru_locale() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        let at = msk.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();

        assert_eq!(format_upload_date(&at), "07.03.2026");
        assert_eq!(format_upload_timestamp(&at), "07.03.2026, 09:05:01");
    }

    #[test]
    fn local_rendering_shifts_the_calendar_day() {
        let utc = Utc.with_ymd_and_hms(2026, 12, 31, 22, 30, 0).unwrap();
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_upload_date(&utc), "31.12.2026");
        assert_eq!(format_upload_date(&utc.with_timezone(&msk)), "01.01.2027");
    }

    #[test]
    fn checkboxes_route_to_the_right_flags() {
        let mut app = DocflowApp::new(DocflowConfig::default());

        CategoryCheckbox::Smr.apply(&mut app, true);
        CategoryCheckbox::Ttn.apply(&mut app, true);
        CategoryCheckbox::WarehouseReceipt.apply(&mut app, true);

        let flags = app.categories();
        assert!(!CategoryCheckbox::Smr.is_checked(flags));
        assert!(CategoryCheckbox::Ttn.is_checked(flags));
        assert!(CategoryCheckbox::WarehouseReceipt.is_checked(flags));
    }

    #[test]
    fn checkbox_ids_are_unique() {
        let mut ids: Vec<&str> = CategoryCheckbox::all().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CategoryCheckbox::all().len());
    }

    #[test]
    fn selected_items_get_a_distinct_class() {
        assert_ne!(document_item_class(true), document_item_class(false));
        assert!(document_item_class(true).contains("selected"));
    }

    #[test]
    fn user_menu_inventory_is_stable() {
        let all = UserMenuItem::all();
        assert_eq!(all.len(), 2);
        for item in all {
            assert!(!item.label().trim().is_empty());
            assert!(!item.icon().trim().is_empty());
        }
    }
}
