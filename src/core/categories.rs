//! Paperwork categories requested for export.
//!
//! SMR and TTN are mutually exclusive, so they are stored as a single
//! [`WaybillKind`] choice; the warehouse receipt is independent.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaybillKind {
    #[default]
    None,
    /// International consignment note (CMR, "СМР").
    Smr,
    /// Domestic waybill ("ТТН").
    Ttn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFlags {
    pub warehouse_receipt: bool,
    pub waybill: WaybillKind,
}

impl CategoryFlags {
    pub fn smr(&self) -> bool {
        self.waybill == WaybillKind::Smr
    }

    pub fn ttn(&self) -> bool {
        self.waybill == WaybillKind::Ttn
    }

    pub fn set_warehouse_receipt(&mut self, checked: bool) {
        self.warehouse_receipt = checked;
    }

    /// Checking SMR unchecks TTN. Unchecking SMR leaves TTN alone.
    pub fn set_smr(&mut self, checked: bool) {
        self.set_exclusive(WaybillKind::Smr, checked);
    }

    /// Checking TTN unchecks SMR. Unchecking TTN leaves SMR alone.
    pub fn set_ttn(&mut self, checked: bool) {
        self.set_exclusive(WaybillKind::Ttn, checked);
    }

    fn set_exclusive(&mut self, kind: WaybillKind, checked: bool) {
        if checked {
            self.waybill = kind;
        } else if self.waybill == kind {
            self.waybill = WaybillKind::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    enum Toggle {
        Smr(bool),
        Ttn(bool),
        Warehouse(bool),
    }

    const ALL_TOGGLES: [Toggle; 6] = [
        Toggle::Smr(true),
        Toggle::Smr(false),
        Toggle::Ttn(true),
        Toggle::Ttn(false),
        Toggle::Warehouse(true),
        Toggle::Warehouse(false),
    ];

    fn apply(flags: &mut CategoryFlags, t: Toggle) {
        match t {
            Toggle::Smr(v) => flags.set_smr(v),
            Toggle::Ttn(v) => flags.set_ttn(v),
            Toggle::Warehouse(v) => flags.set_warehouse_receipt(v),
        }
    }

    #[test]
    fn smr_then_ttn_leaves_only_ttn() {
        let mut flags = CategoryFlags::default();
        flags.set_smr(true);
        flags.set_ttn(true);
        assert!(!flags.smr());
        assert!(flags.ttn());
    }

    #[test]
    fn unchecking_does_not_touch_the_other_waybill() {
        let mut flags = CategoryFlags::default();
        flags.set_ttn(true);
        flags.set_smr(false);
        assert!(flags.ttn());

        flags.set_ttn(false);
        assert_eq!(flags.waybill, WaybillKind::None);
    }

    #[test]
    fn warehouse_receipt_is_independent() {
        let mut flags = CategoryFlags::default();
        flags.set_warehouse_receipt(true);
        flags.set_smr(true);
        flags.set_ttn(true);
        assert!(flags.warehouse_receipt);

        flags.set_warehouse_receipt(false);
        assert!(flags.ttn());
    }

    #[test]
    fn at_most_one_waybill_for_every_toggle_sequence() {
        // Exhaustive over all sequences up to length 5 (6^5 = 7776).
        fn walk(flags: CategoryFlags, depth: usize) {
            assert!(!(flags.smr() && flags.ttn()));
            if depth == 0 {
                return;
            }
            for t in ALL_TOGGLES {
                let mut next = flags;
                apply(&mut next, t);
                walk(next, depth - 1);
            }
        }
        walk(CategoryFlags::default(), 5);
    }
}
