//! Transport order ("транспортная накладная") form model.
//!
//! The form is never validated, submitted or persisted; the values only live
//! as long as the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    MultiLine,
    Number,
    Date,
}

impl InputKind {
    /// HTML `type` attribute for single-line inputs.
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::MultiLine => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Sender,
    SenderAddress,
    Receiver,
    ReceiverAddress,
    Route,
    Transport,
    RegNumber,
    Driver,
    Cargo,
    WeightKg,
    VolumeM3,
    Places,
    DepartureDate,
    ArrivalDate,
    CargoValue,
    FreightRate,
}

impl OrderField {
    /// DOM id for the input.
    pub fn id(self) -> &'static str {
        match self {
            OrderField::Sender => "sender",
            OrderField::SenderAddress => "address",
            OrderField::Receiver => "receiver",
            OrderField::ReceiverAddress => "receiver-address",
            OrderField::Route => "route",
            OrderField::Transport => "transport",
            OrderField::RegNumber => "reg-number",
            OrderField::Driver => "driver",
            OrderField::Cargo => "cargo",
            OrderField::WeightKg => "weight",
            OrderField::VolumeM3 => "volume",
            OrderField::Places => "places",
            OrderField::DepartureDate => "departure-date",
            OrderField::ArrivalDate => "arrival-date",
            OrderField::CargoValue => "cargo-value",
            OrderField::FreightRate => "freight-rate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderField::Sender => "Отправитель / Consignor",
            OrderField::SenderAddress => "Адрес / Address",
            OrderField::Receiver => "Получатель / Receiver",
            OrderField::ReceiverAddress => "Адрес получателя / Receiver's address",
            OrderField::Route => "Маршрут / Route",
            OrderField::Transport => "Транспорт / Transport",
            OrderField::RegNumber => "Гос. номер / Reg. number",
            OrderField::Driver => "Водитель / Driver",
            OrderField::Cargo => "Наименование груза / Name of cargo",
            OrderField::WeightKg => "Вес / Weight (кг)",
            OrderField::VolumeM3 => "Объём / Volume (м³)",
            OrderField::Places => "Мест / Places",
            OrderField::DepartureDate => "Дата отправки / Date of departure",
            OrderField::ArrivalDate => "Дата прибытия / Date of arrival",
            OrderField::CargoValue => "Стоимость груза / Cargo value",
            OrderField::FreightRate => "Сумма фрахта / Freight's rate",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            OrderField::Sender => "ООО Компания",
            OrderField::SenderAddress => "г. Москва, ул. Ленина, д. 1",
            OrderField::Receiver => "ООО Получатель",
            OrderField::ReceiverAddress => "г. Санкт-Петербург",
            OrderField::Route => "Москва - Санкт-Петербург",
            OrderField::Transport => "Автомобиль",
            OrderField::RegNumber => "А000АА00",
            OrderField::Driver => "ФИО водителя",
            OrderField::Cargo => "Описание груза",
            OrderField::WeightKg => "1000",
            OrderField::VolumeM3 => "10",
            OrderField::Places => "5",
            OrderField::DepartureDate | OrderField::ArrivalDate => "",
            OrderField::CargoValue | OrderField::FreightRate => "Стоимость",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            OrderField::Cargo => InputKind::MultiLine,
            OrderField::WeightKg | OrderField::VolumeM3 | OrderField::Places => InputKind::Number,
            OrderField::DepartureDate | OrderField::ArrivalDate => InputKind::Date,
            _ => InputKind::Text,
        }
    }

    /// Fields grouped into the rows the dialog lays out.
    pub fn rows() -> &'static [&'static [OrderField]] {
        &[
            &[OrderField::Sender, OrderField::SenderAddress],
            &[OrderField::Receiver, OrderField::ReceiverAddress],
            &[OrderField::Route],
            &[OrderField::Transport, OrderField::RegNumber, OrderField::Driver],
            &[OrderField::Cargo],
            &[OrderField::WeightKg, OrderField::VolumeM3, OrderField::Places],
            &[OrderField::DepartureDate, OrderField::ArrivalDate],
            &[OrderField::CargoValue, OrderField::FreightRate],
        ]
    }

    pub fn all() -> impl Iterator<Item = OrderField> {
        Self::rows().iter().flat_map(|row| row.iter().copied())
    }
}

/// Raw, unvalidated form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOrder {
    pub sender: String,
    pub sender_address: String,
    pub receiver: String,
    pub receiver_address: String,
    pub route: String,
    pub transport: String,
    pub reg_number: String,
    pub driver: String,
    pub cargo: String,
    pub weight_kg: String,
    pub volume_m3: String,
    pub places: String,
    pub departure_date: String,
    pub arrival_date: String,
    pub cargo_value: String,
    pub freight_rate: String,
}

impl TransportOrder {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Sender => &self.sender,
            OrderField::SenderAddress => &self.sender_address,
            OrderField::Receiver => &self.receiver,
            OrderField::ReceiverAddress => &self.receiver_address,
            OrderField::Route => &self.route,
            OrderField::Transport => &self.transport,
            OrderField::RegNumber => &self.reg_number,
            OrderField::Driver => &self.driver,
            OrderField::Cargo => &self.cargo,
            OrderField::WeightKg => &self.weight_kg,
            OrderField::VolumeM3 => &self.volume_m3,
            OrderField::Places => &self.places,
            OrderField::DepartureDate => &self.departure_date,
            OrderField::ArrivalDate => &self.arrival_date,
            OrderField::CargoValue => &self.cargo_value,
            OrderField::FreightRate => &self.freight_rate,
        }
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let slot = match field {
            OrderField::Sender => &mut self.sender,
            OrderField::SenderAddress => &mut self.sender_address,
            OrderField::Receiver => &mut self.receiver,
            OrderField::ReceiverAddress => &mut self.receiver_address,
            OrderField::Route => &mut self.route,
            OrderField::Transport => &mut self.transport,
            OrderField::RegNumber => &mut self.reg_number,
            OrderField::Driver => &mut self.driver,
            OrderField::Cargo => &mut self.cargo,
            OrderField::WeightKg => &mut self.weight_kg,
            OrderField::VolumeM3 => &mut self.volume_m3,
            OrderField::Places => &mut self.places,
            OrderField::DepartureDate => &mut self.departure_date,
            OrderField::ArrivalDate => &mut self.arrival_date,
            OrderField::CargoValue => &mut self.cargo_value,
            OrderField::FreightRate => &mut self.freight_rate,
        };
        *slot = value.into();
    }
}

/// Destinations offered by the share submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Telegram,
    WhatsApp,
    Email,
}

impl ShareTarget {
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Telegram => "Telegram",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Email => "Email",
        }
    }

    pub fn all() -> &'static [ShareTarget] {
        &[ShareTarget::Telegram, ShareTarget::WhatsApp, ShareTarget::Email]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_inventory_is_stable() {
        let all: Vec<OrderField> = OrderField::all().collect();
        assert_eq!(all.len(), 16);

        let mut ids: Vec<&str> = all.iter().map(|f| f.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);

        for f in all {
            assert!(!f.label().trim().is_empty());
        }
    }

    #[test]
    fn set_then_get_hits_the_same_slot() {
        let mut order = TransportOrder::default();
        for (i, field) in OrderField::all().enumerate() {
            order.set(field, format!("v{i}"));
        }
        for (i, field) in OrderField::all().enumerate() {
            assert_eq!(order.get(field), format!("v{i}"));
        }
    }

    #[test]
    fn input_kinds_match_layout() {
        assert_eq!(OrderField::Cargo.kind(), InputKind::MultiLine);
        assert_eq!(OrderField::Places.kind().html_type(), "number");
        assert_eq!(OrderField::ArrivalDate.kind().html_type(), "date");
        assert_eq!(OrderField::Driver.kind().html_type(), "text");
    }
}
