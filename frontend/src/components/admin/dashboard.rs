use std::rc::Rc;

use jumat_berkah_backend::UiEvent;
use shared::{AppData, StorageUsage};
use yew::prelude::*;

use super::content_tab::ContentTab;
use super::distribution_tab::DistributionTab;
use super::expense_tab::ExpenseTab;
use super::income_tab::IncomeTab;
use super::layout_tab::LayoutTab;
use super::storage_tab::StorageTab;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdminTab {
    Income,
    Expense,
    Distribution,
    Content,
    Layout,
    Storage,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Income,
        AdminTab::Expense,
        AdminTab::Distribution,
        AdminTab::Content,
        AdminTab::Layout,
        AdminTab::Storage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Income => "Pemasukan",
            AdminTab::Expense => "Pengeluaran",
            AdminTab::Distribution => "Penyaluran",
            AdminTab::Content => "Konten",
            AdminTab::Layout => "Desain Layout",
            AdminTab::Storage => "Penyimpanan",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AdminTab::Layout => "Sistem Desain",
            AdminTab::Storage => "Penyimpanan Data",
            _ => "Manajemen Log",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminDashboardProps {
    pub data: Rc<AppData>,
    pub usage: StorageUsage,
    pub quota_bytes: Option<usize>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard(props: &AdminDashboardProps) -> Html {
    let active_tab = use_state(|| AdminTab::Income);
    let data = &props.data;

    let on_logout = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::Logout))
    };

    html! {
        <div class="admin-dashboard" data-color={data.layout.primary_color.as_str()}>
            <aside class="admin-sidebar">
                <span class="admin-brand">{"Admin Portal"}</span>
                <nav>
                    {for AdminTab::ALL.into_iter().map(|tab| {
                        let onclick = {
                            let active_tab = active_tab.clone();
                            Callback::from(move |_: MouseEvent| active_tab.set(tab))
                        };
                        let badge = match tab {
                            AdminTab::Income if !data.pending_incomes.is_empty() => {
                                html! { <span class="badge">{data.pending_incomes.len().to_string()}</span> }
                            }
                            _ => html! {},
                        };
                        html! {
                            <button class={classes!("tab-button", (*active_tab == tab).then_some("active"))} {onclick}>
                                {tab.label()}
                                {badge}
                            </button>
                        }
                    })}
                </nav>
                <button class="btn btn-secondary logout" onclick={on_logout}>{"Log Out"}</button>
            </aside>

            <main class="admin-main">
                <header class="admin-header">
                    <h1>{active_tab.title()}</h1>
                </header>
                {match *active_tab {
                    AdminTab::Income => html! {
                        <IncomeTab
                            incomes={data.incomes.clone()}
                            pending_incomes={data.pending_incomes.clone()}
                            on_event={props.on_event.clone()}
                        />
                    },
                    AdminTab::Expense => html! {
                        <ExpenseTab expenses={data.expenses.clone()} on_event={props.on_event.clone()} />
                    },
                    AdminTab::Distribution => html! {
                        <DistributionTab distributions={data.distributions.clone()} on_event={props.on_event.clone()} />
                    },
                    AdminTab::Content => html! {
                        <ContentTab
                            articles={data.articles.clone()}
                            gallery={data.gallery.clone()}
                            on_event={props.on_event.clone()}
                        />
                    },
                    AdminTab::Layout => html! {
                        <LayoutTab layout={data.layout.clone()} on_event={props.on_event.clone()} />
                    },
                    AdminTab::Storage => html! {
                        <StorageTab
                            usage={props.usage}
                            pending_count={data.pending_incomes.len()}
                            quota_bytes={props.quota_bytes}
                            on_event={props.on_event.clone()}
                        />
                    },
                }}
            </main>
        </div>
    }
}
