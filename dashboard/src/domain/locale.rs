//! Locale rules used to format the dashboard's labels.
//!
//! Each locale supplies weekday and month names plus its own "weekday long
//! form" rule. Portuguese, for example, writes working days as
//! `segunda-feira` while the weekend keeps its bare name.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::models::CurrentMonth;

pub trait LocaleRules {
    /// Bare weekday name, lowercase where the language does so
    fn weekday_name(&self, weekday: Weekday) -> &'static str;

    /// Month name for a 0-indexed month
    fn month_name(&self, month0: u32) -> &'static str;

    /// "Day DD of Month" label for the selected date
    fn day_of_month_text(&self, date: NaiveDate) -> String;

    /// Weekday as displayed above the appointment list
    fn weekday_long_form(&self, weekday: Weekday) -> String {
        self.weekday_name(weekday).to_string()
    }

    /// 24-hour `HH:mm` label
    fn hour_label(&self, instant: &DateTime<FixedOffset>) -> String {
        instant.format("%H:%M").to_string()
    }

    /// Calendar caption, e.g. "Janeiro 2024"
    fn month_label(&self, month: CurrentMonth) -> String {
        format!("{} {}", capitalize(self.month_name(month.month0())), month.year())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Brazilian Portuguese
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBr;

impl LocaleRules for PtBr {
    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "segunda",
            Weekday::Tue => "terça",
            Weekday::Wed => "quarta",
            Weekday::Thu => "quinta",
            Weekday::Fri => "sexta",
            Weekday::Sat => "sábado",
            Weekday::Sun => "domingo",
        }
    }

    fn month_name(&self, month0: u32) -> &'static str {
        match month0 {
            0 => "janeiro",
            1 => "fevereiro",
            2 => "março",
            3 => "abril",
            4 => "maio",
            5 => "junho",
            6 => "julho",
            7 => "agosto",
            8 => "setembro",
            9 => "outubro",
            10 => "novembro",
            11 => "dezembro",
            _ => "mês inválido",
        }
    }

    fn day_of_month_text(&self, date: NaiveDate) -> String {
        format!("Dia {:02} de {}", date.day(), self.month_name(date.month0()))
    }

    fn weekday_long_form(&self, weekday: Weekday) -> String {
        let name = self.weekday_name(weekday);
        if is_weekend(weekday) {
            name.to_string()
        } else {
            format!("{}-feira", name)
        }
    }
}

/// US English
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUs;

impl LocaleRules for EnUs {
    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    fn month_name(&self, month0: u32) -> &'static str {
        match month0 {
            0 => "January",
            1 => "February",
            2 => "March",
            3 => "April",
            4 => "May",
            5 => "June",
            6 => "July",
            7 => "August",
            8 => "September",
            9 => "October",
            10 => "November",
            11 => "December",
            _ => "Invalid Month",
        }
    }

    fn day_of_month_text(&self, date: NaiveDate) -> String {
        format!("Day {:02} of {}", date.day(), self.month_name(date.month0()))
    }
}

/// Locale selector as it appears in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocaleTag {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl LocaleTag {
    pub fn rules(&self) -> Box<dyn LocaleRules> {
        match self {
            LocaleTag::PtBr => Box::new(PtBr),
            LocaleTag::EnUs => Box::new(EnUs),
        }
    }
}
