use yew::prelude::*;

use crate::render::{PaymentMethodRow, TopExpenseRow};

#[derive(Properties, PartialEq)]
pub struct TopExpensesPanelProps {
    pub rows: Vec<TopExpenseRow>,
}

#[function_component(TopExpensesPanel)]
pub fn top_expenses_panel(props: &TopExpensesPanelProps) -> Html {
    html! {
        <section class="report-panel top-expenses">
            <h3>{"Largest Expenses"}</h3>
            {if props.rows.is_empty() {
                html! { <p class="report-empty">{"No expenses in this period"}</p> }
            } else {
                html! {
                    <ol class="report-list">
                        {for props.rows.iter().map(|row| html! {
                            <li key={row.rank}>
                                <span class="rank">{format!("{}.", row.rank)}</span>
                                <span class="category-icon" style={format!("color: {}", row.category.color)}>
                                    {&row.category.icon}
                                </span>
                                <span class="report-description">
                                    {&row.description}
                                    <small>{format!("{} · {}", row.category.name, row.date)}</small>
                                </span>
                                <span class="amount expense">{&row.amount}</span>
                            </li>
                        })}
                    </ol>
                }
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentMethodsPanelProps {
    pub rows: Vec<PaymentMethodRow>,
}

#[function_component(PaymentMethodsPanel)]
pub fn payment_methods_panel(props: &PaymentMethodsPanelProps) -> Html {
    html! {
        <section class="report-panel payment-methods">
            <h3>{"By Payment Method"}</h3>
            {if props.rows.is_empty() {
                html! { <p class="report-empty">{"No expenses in this period"}</p> }
            } else {
                html! {
                    <table class="report-table">
                        <tbody>
                            {for props.rows.iter().map(|row| html! {
                                <tr>
                                    <td>{&row.method}</td>
                                    <td class="count">{format!("{}x", row.count)}</td>
                                    <td class="share">{&row.share}</td>
                                    <td class="amount expense">{&row.total}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}
        </section>
    }
}
