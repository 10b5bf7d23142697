use std::str::FromStr;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::power::{DataType, PowerTypeMapping};

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
}

impl SelectOption {
    pub fn new(value: impl Into<AttrValue>, label: impl Into<AttrValue>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
}

/// Labelled dropdown emitting the value of the chosen option
#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <label class="filter-select">
            <span class="filter-label">{props.label.clone()}</span>
            <select onchange={on_change} aria-label={props.label.clone()}>
                {
                    props.options.iter().map(|option| {
                        let selected = option.value == props.value;
                        html! {
                            <option value={option.value.clone()} {selected}>{option.label.clone()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </label>
    }
}

/// Adapts a typed callback to a select's string value. Values that do not
/// parse are dropped.
pub fn parsed_callback<T: FromStr + 'static>(callback: Callback<T>) -> Callback<String> {
    Callback::from(move |value: String| {
        if let Ok(parsed) = value.parse::<T>() {
            callback.emit(parsed);
        }
    })
}

pub fn data_type_options() -> Vec<SelectOption> {
    DataType::all()
        .iter()
        .map(|t| SelectOption::new(t.value(), t.label()))
        .collect()
}

/// "All Regions" followed by every region.
pub fn region_options(regions: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "All Regions"))
        .chain(regions.iter().map(|r| SelectOption::new(r.clone(), r.clone())))
        .collect()
}

/// "All Types" followed by every power type, keyed by its id.
pub fn power_type_options(power_types: &[PowerTypeMapping]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "All Types"))
        .chain(power_types.iter().map(|t| {
            SelectOption::new(t.power_type_id.to_string(), t.power_type_name.clone())
        }))
        .collect()
}
