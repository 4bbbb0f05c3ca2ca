use shared::TransactionType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::render::CategoryOption;
use crate::state::{FormField, FormFields};

/// Suggestions offered by the payment method input; any text is accepted
const PAYMENT_METHODS: [&str; 5] = ["Dinheiro", "Cartão de Crédito", "Cartão de Débito", "PIX", "Transferência"];

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub fields: FormFields,
    pub categories: Vec<CategoryOption>,
    pub form_error: Option<String>,
    pub submitting: bool,

    pub on_field_change: Callback<(FormField, String)>,
    pub on_type_select: Callback<TransactionType>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(TransactionFormModal)]
pub fn transaction_form_modal(props: &TransactionFormProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let input_change = |field: FormField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_category_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((FormField::Category, select.value()));
        })
    };

    let type_tab = |kind: TransactionType, label: &'static str| {
        let on_type_select = props.on_type_select.clone();
        let active = props.fields.kind == kind;
        html! {
            <button
                type="button"
                class={classes!("type-tab", kind.as_wire(), active.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| on_type_select.emit(kind))}
                disabled={props.submitting}
            >
                {label}
            </button>
        }
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal transaction-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{props.title.clone()}</h3>

                <div class="type-tabs">
                    {type_tab(TransactionType::Expense, "Expense")}
                    {type_tab(TransactionType::Income, "Income")}
                </div>

                {if let Some(error) = props.form_error.as_ref() {
                    html! {
                        <div class="form-message error">
                            {error}
                        </div>
                    }
                } else { html! {} }}

                <form class="transaction-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="descricao">{"Description"}</label>
                        <input
                            type="text"
                            id="descricao"
                            placeholder="Groceries, rent, salary..."
                            value={props.fields.description.clone()}
                            oninput={input_change(FormField::Description)}
                            disabled={props.submitting}
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="valor">{"Amount"}</label>
                            <input
                                type="number"
                                id="valor"
                                placeholder="0,00"
                                step="0.01"
                                min="0.01"
                                value={props.fields.amount.clone()}
                                oninput={input_change(FormField::Amount)}
                                disabled={props.submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="data">{"Date"}</label>
                            <input
                                type="date"
                                id="data"
                                value={props.fields.date.clone()}
                                oninput={input_change(FormField::Date)}
                                disabled={props.submitting}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="categoria_id">{"Category"}</label>
                        <select id="categoria_id" onchange={on_category_change} disabled={props.submitting}>
                            {for props.categories.iter().map(|option| html! {
                                <option
                                    value={option.value.clone()}
                                    selected={option.value == props.fields.category_id}
                                >
                                    {&option.label}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="forma_pagamento">{"Payment method"}</label>
                        <input
                            type="text"
                            id="forma_pagamento"
                            list="payment-methods"
                            value={props.fields.payment_method.clone()}
                            oninput={input_change(FormField::PaymentMethod)}
                            disabled={props.submitting}
                        />
                        <datalist id="payment-methods">
                            {for PAYMENT_METHODS.iter().map(|method| html! { <option value={*method} /> })}
                        </datalist>
                    </div>

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
