//! Static subscription tiers. Choosing one has no billing effect.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentQuota {
    Extra(u32),
    Unlimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionPlan {
    Basic,
    Standard,
    Premium,
}

impl SubscriptionPlan {
    pub fn name(self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Базовый",
            SubscriptionPlan::Standard => "Стандартный",
            SubscriptionPlan::Premium => "Премиум",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Для начинающих",
            SubscriptionPlan::Standard => "Популярный выбор",
            SubscriptionPlan::Premium => "Для профессионалов",
        }
    }

    /// Monthly price in roubles.
    pub fn monthly_price_rub(self) -> u32 {
        match self {
            SubscriptionPlan::Basic => 500,
            SubscriptionPlan::Standard => 1200,
            SubscriptionPlan::Premium => 2500,
        }
    }

    pub fn quota(self) -> DocumentQuota {
        match self {
            SubscriptionPlan::Basic => DocumentQuota::Extra(50),
            SubscriptionPlan::Standard => DocumentQuota::Extra(150),
            SubscriptionPlan::Premium => DocumentQuota::Unlimited,
        }
    }

    pub fn quota_label(self) -> String {
        match self.quota() {
            DocumentQuota::Extra(n) => format!("+{n} документов"),
            DocumentQuota::Unlimited => "Безлимитные документы".to_string(),
        }
    }

    pub fn price_label(self) -> String {
        format!("{}₽", self.monthly_price_rub())
    }

    /// The tier rendered with the accent colour.
    pub fn is_featured(self) -> bool {
        matches!(self, SubscriptionPlan::Standard)
    }

    pub fn all() -> &'static [SubscriptionPlan] {
        &[
            SubscriptionPlan::Basic,
            SubscriptionPlan::Standard,
            SubscriptionPlan::Premium,
        ]
    }
}
