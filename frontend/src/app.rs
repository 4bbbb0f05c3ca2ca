use chrono::Datelike;
use gloo::timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::charts::{category_chart_data, trend_chart_data};
use crate::components::{
    CategoryChart, ConfirmModal, Header, PaymentMethodsPanel, SummaryCards, ToastStack,
    TopExpensesPanel, TransactionFormModal, TransactionList, TrendChart,
};
use crate::controller::{self, Command, Controller};
use crate::render::{
    render_category_options, render_payment_methods, render_summary_cards, render_top_expenses,
    render_transaction_list,
};
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::date_utils;
use crate::services::format::CurrencyFormat;
use crate::services::logging::{LogLevel, Logger};
use crate::state::FormField;

/// Root component: owns the controller and runs the commands it returns
pub struct App {
    api_client: ApiClient,
    controller: Controller,
    currency: CurrencyFormat,
    years: Vec<i32>,
}

impl Component for App {
    type Message = controller::Event;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = AppConfig::load();
        Logger::init(config.log_level);

        let today = date_utils::today();
        let filter = date_utils::period_of(today);
        Logger::info_with_component(
            "app",
            &format!("Starting dashboard for {} against {}", filter, config.api_base_url),
        );

        ctx.link().send_message(controller::Event::Init);

        Self {
            api_client: ApiClient::with_base_url(config.api_base_url.clone()),
            controller: Controller::new(&config, today, filter),
            currency: config.currency.clone(),
            years: date_utils::year_options(today.year()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        for command in self.controller.handle(msg) {
            self.execute(ctx, command);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let store = self.controller.store();
        let form = self.controller.form();
        let reports = store.reports();

        let on_filter_change =
            link.callback(|(month, year): (u32, i32)| controller::Event::FilterChanged { month, year });
        let on_new_transaction = link.callback(|_: ()| controller::Event::NewTransactionClicked);
        let on_seed_categories = link.callback(|_: ()| controller::Event::SeedCategoriesClicked);
        let on_edit = link.callback(controller::Event::EditClicked);
        let on_delete = link.callback(controller::Event::DeleteClicked);
        let on_field_change =
            link.callback(|(field, value): (FormField, String)| controller::Event::FieldChanged(field, value));
        let on_type_select = link.callback(controller::Event::TypeSelected);
        let on_submit = link.callback(|_: ()| controller::Event::FormSubmitted);
        let on_close = link.callback(|_: ()| controller::Event::FormDismissed);
        let on_confirm_delete = link.callback(|_: ()| controller::Event::DeleteConfirmed);
        let on_cancel_delete = link.callback(|_: ()| controller::Event::DeleteCancelled);
        let on_dismiss_toast = link.callback(controller::Event::ToastExpired);

        let pending_delete = self.controller.pending_delete();
        let delete_message = pending_delete
            .map(|tx| format!("Delete \"{}\"? This cannot be undone.", tx.description))
            .unwrap_or_default();

        html! {
            <div class="app">
                <Header
                    filter={store.filter()}
                    years={self.years.clone()}
                    loading={self.controller.is_loading()}
                    {on_filter_change}
                    {on_new_transaction}
                    {on_seed_categories}
                />

                <main class="main">
                    <div class="container">
                        <SummaryCards cards={render_summary_cards(store.summary(), &self.currency)} />

                        <div class="charts-grid">
                            <CategoryChart data={category_chart_data(reports.category_breakdown.as_ref())} />
                            <TrendChart data={trend_chart_data(&reports.trend)} currency={self.currency.clone()} />
                        </div>

                        <div class="reports-grid">
                            <TopExpensesPanel
                                rows={render_top_expenses(reports.top_expenses.as_ref(), store.categories(), &self.currency)}
                            />
                            <PaymentMethodsPanel
                                rows={render_payment_methods(reports.payment_methods.as_ref(), &self.currency)}
                            />
                        </div>

                        <TransactionList
                            view={render_transaction_list(store.transactions(), store.categories(), &self.currency)}
                            loading={self.controller.is_loading()}
                            {on_edit}
                            {on_delete}
                        />
                    </div>
                </main>

                <TransactionFormModal
                    is_open={form.is_open()}
                    title={form.title()}
                    fields={form.fields.clone()}
                    categories={render_category_options(store.categories())}
                    form_error={form.error.clone()}
                    submitting={form.submitting}
                    {on_field_change}
                    {on_type_select}
                    {on_submit}
                    {on_close}
                />

                <ConfirmModal
                    is_open={pending_delete.is_some()}
                    title="Delete transaction"
                    message={delete_message}
                    on_confirm={on_confirm_delete}
                    on_cancel={on_cancel_delete}
                />

                <ToastStack toasts={self.controller.toasts().to_vec()} on_dismiss={on_dismiss_toast} />
            </div>
        }
    }
}

impl App {
    fn execute(&self, ctx: &Context<Self>, command: Command) {
        use controller::Event;

        let api = self.api_client.clone();
        let link = ctx.link();
        if Logger::enabled(LogLevel::Debug) {
            Logger::debug_with_component("app", &format!("Executing {:?}", command));
        }

        match command {
            Command::FetchCategories => {
                link.send_future(async move { Event::CategoriesLoaded(api.list_categories().await) })
            }
            Command::SeedCategories => link.send_future(async move {
                Event::CategoriesSeeded(api.seed_default_categories().await)
            }),
            Command::FetchTransactions(token, filter) => link.send_future(async move {
                Event::TransactionsLoaded(token, api.list_transactions(filter).await)
            }),
            Command::FetchSummary(token, filter) => link.send_future(async move {
                Event::SummaryLoaded(token, api.get_summary(filter).await)
            }),
            Command::FetchCategoryBreakdown(token, filter) => link.send_future(async move {
                Event::CategoryBreakdownLoaded(token, api.get_category_breakdown(filter).await)
            }),
            Command::FetchTrend(token, months) => link.send_future(async move {
                Event::TrendLoaded(token, api.get_trend(months).await)
            }),
            Command::FetchTopExpenses(token, filter, limit) => link.send_future(async move {
                Event::TopExpensesLoaded(token, api.get_top_expenses(filter, limit).await)
            }),
            Command::FetchPaymentMethods(token, filter) => link.send_future(async move {
                Event::PaymentMethodsLoaded(token, api.get_payment_method_breakdown(filter).await)
            }),
            Command::CreateTransaction(fields) => link.send_future(async move {
                Event::TransactionSaved {
                    updated: false,
                    result: api.create_transaction(&fields).await,
                }
            }),
            Command::UpdateTransaction(id, fields) => link.send_future(async move {
                Event::TransactionSaved {
                    updated: true,
                    result: api.update_transaction(id, &fields).await,
                }
            }),
            Command::DeleteTransaction(id) => link.send_future(async move {
                Event::TransactionDeleted(api.delete_transaction(id).await)
            }),
            Command::ExpireToast { id, after_ms } => link.send_future(async move {
                TimeoutFuture::new(after_ms).await;
                Event::ToastExpired(id)
            }),
        }
    }
}
