//! Records under construction

use crate::grammar::PropertyValue;
use crate::lexer::PropertyName;
use chronorec_core::{Color, Record, Timestamp, Units, Weight};

/// State of one field on a pending record.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Empty,
    /// A value was given but failed validation. Counts as present.
    Rejected,
    Filled(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<T> Slot<T> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Slot::Empty)
    }

    pub fn as_filled(&self) -> Option<&T> {
        match self {
            Slot::Filled(value) => Some(value),
            _ => None,
        }
    }

    fn into_filled(self) -> Option<T> {
        match self {
            Slot::Filled(value) => Some(value),
            _ => None,
        }
    }
}

/// A record being assembled between `BEGIN:RECORD` and `END:RECORD`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRecord {
    pub identifier: Slot<String>,
    pub time: Slot<Timestamp>,
    pub units: Slot<Units>,
    pub weight: Slot<Weight>,
    pub color: Slot<Color>,
}

impl PendingRecord {
    pub fn is_set(&self, name: PropertyName) -> bool {
        match name {
            PropertyName::Identifier => self.identifier.is_present(),
            PropertyName::Time => self.time.is_present(),
            PropertyName::Units => self.units.is_present(),
            PropertyName::Weight => self.weight.is_present(),
            PropertyName::Color => self.color.is_present(),
        }
    }

    pub fn fill(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Identifier(v) => self.identifier = Slot::Filled(v),
            PropertyValue::Time(v) => self.time = Slot::Filled(v),
            PropertyValue::Units(v) => self.units = Slot::Filled(v),
            PropertyValue::Weight(v) => self.weight = Slot::Filled(v),
            PropertyValue::Color(v) => self.color = Slot::Filled(v),
        }
    }

    pub fn reject(&mut self, name: PropertyName) {
        match name {
            PropertyName::Identifier => self.identifier = Slot::Rejected,
            PropertyName::Time => self.time = Slot::Rejected,
            PropertyName::Units => self.units = Slot::Rejected,
            PropertyName::Weight => self.weight = Slot::Rejected,
            PropertyName::Color => self.color = Slot::Rejected,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_filled().map(String::as_str)
    }

    /// Freeze into a `Record`. `None` unless every present field is valid,
    /// both required fields are set and units/weight agree.
    pub fn into_record(self) -> Option<Record> {
        if matches!(self.color, Slot::Rejected) {
            return None;
        }
        let measurement = match (self.weight, self.units) {
            (Slot::Filled(weight), Slot::Filled(units)) => Some((weight, units)),
            (Slot::Empty, Slot::Empty) => None,
            _ => return None,
        };

        let mut record = Record::new(self.identifier.into_filled()?, self.time.into_filled()?);
        if let Some((weight, units)) = measurement {
            record = record.with_measurement(weight, units);
        }
        record.color = self.color.into_filled();
        Some(record)
    }
}
