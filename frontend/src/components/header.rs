use shared::Filter;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::format::month_name;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub filter: Filter,
    pub years: Vec<i32>,
    pub loading: bool,
    pub on_filter_change: Callback<(u32, i32)>,
    pub on_new_transaction: Callback<()>,
    pub on_seed_categories: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_month_change = {
        let on_filter_change = props.on_filter_change.clone();
        let year = props.filter.year;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(month) = select.value().parse::<u32>() {
                on_filter_change.emit((month, year));
            }
        })
    };

    let on_year_change = {
        let on_filter_change = props.on_filter_change.clone();
        let month = props.filter.month;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                on_filter_change.emit((month, year));
            }
        })
    };

    let on_new_click = {
        let on_new_transaction = props.on_new_transaction.clone();
        Callback::from(move |_: MouseEvent| on_new_transaction.emit(()))
    };

    let on_seed_click = {
        let on_seed_categories = props.on_seed_categories.clone();
        Callback::from(move |_: MouseEvent| on_seed_categories.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Personal Finance"}</h1>
                <div class="header-right">
                    <div class="period-filter">
                        <select id="filter-month" class="filter-select" onchange={on_month_change}>
                            {for (1..=12u32).map(|month| html! {
                                <option value={month.to_string()} selected={month == props.filter.month}>
                                    {month_name(month)}
                                </option>
                            })}
                        </select>
                        <select id="filter-year" class="filter-select" onchange={on_year_change}>
                            {for props.years.iter().map(|year| html! {
                                <option value={year.to_string()} selected={*year == props.filter.year}>
                                    {year}
                                </option>
                            })}
                        </select>
                        {if props.loading {
                            html! { <span class="loading-spinner small"></span> }
                        } else {
                            html! {}
                        }}
                    </div>
                    <div class="header-actions">
                        <button class="btn btn-secondary" onclick={on_seed_click} title="Create the default categories">
                            {"Seed categories"}
                        </button>
                        <button class="btn btn-primary" onclick={on_new_click}>
                            {"+ New transaction"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
