use yew::prelude::*;

use crate::render::SummaryCards as SummaryCardsView;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub cards: SummaryCardsView,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let cards = &props.cards;

    html! {
        <section class="summary-cards">
            <div class="summary-card income">
                <span class="summary-label">{"Income"}</span>
                <span class="summary-value">{&cards.total_income}</span>
            </div>
            <div class="summary-card expense">
                <span class="summary-label">{"Expenses"}</span>
                <span class="summary-value">{&cards.total_expense}</span>
            </div>
            <div class="summary-card balance">
                <span class="summary-label">{"Balance"}</span>
                <span class="summary-value" style={format!("color: {}", cards.balance_tone.color())}>
                    {&cards.balance}
                </span>
            </div>
            <div class="summary-card count">
                <span class="summary-label">{"Transactions"}</span>
                <span class="summary-value">{&cards.transaction_count}</span>
            </div>
        </section>
    }
}
