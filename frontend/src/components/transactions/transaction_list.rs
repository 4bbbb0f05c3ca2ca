use shared::{Transaction, TransactionId};
use yew::prelude::*;

use crate::render::{TransactionListView, TransactionRow};

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub view: TransactionListView,
    pub loading: bool,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<TransactionId>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>

            {match &props.view {
                TransactionListView::Empty if props.loading => html! {
                    <div class="loading">{"Loading transactions..."}</div>
                },
                TransactionListView::Empty => html! {
                    <div class="empty-state">
                        <p>{"No transactions found for this period"}</p>
                    </div>
                },
                TransactionListView::Rows(rows) => html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Payment"}</th>
                                    <th>{"Amount"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rows.iter().map(|row| row_html(row, &props.on_edit, &props.on_delete))}
                            </tbody>
                        </table>
                    </div>
                },
            }}
        </section>
    }
}

fn row_html(
    row: &TransactionRow,
    on_edit: &Callback<Transaction>,
    on_delete: &Callback<TransactionId>,
) -> Html {
    let edit = {
        let on_edit = on_edit.clone();
        let transaction = row.transaction.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(transaction.clone()))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = row.transaction.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr key={row.transaction.id}>
            <td class="date">{&row.date}</td>
            <td class="description" title={row.notes.clone()}>
                {&row.description}
                {if row.recurring {
                    html! { <span class="recurring-tag" title="Recurring">{"↻"}</span> }
                } else {
                    html! {}
                }}
            </td>
            <td class="category">
                <span class="category-badge" style={format!("border-color: {0}; color: {0}", row.category.color)}>
                    <span class="category-icon">{&row.category.icon}</span>
                    {&row.category.name}
                </span>
            </td>
            <td class="payment-method">{&row.payment_method}</td>
            <td class={row.amount_class}>{&row.amount}</td>
            <td class="actions">
                <button class="btn-icon edit" title="Edit" onclick={edit}>{"✏️"}</button>
                <button class="btn-icon delete" title="Delete" onclick={delete}>{"🗑️"}</button>
            </td>
        </tr>
    }
}
