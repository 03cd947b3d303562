use jumat_berkah_backend::domain::formatting::format_rupiah;
use shared::{BorderRadius, FinancialSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: FinancialSummary,
    pub border_radius: BorderRadius,
}

fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let card = classes!("summary-card", props.border_radius.as_str());
    let summary = &props.summary;

    html! {
        <div class="summary-cards">
            <div class={card.clone()}>
                <p class="summary-label">{"Pemasukan"}</p>
                <p class="summary-amount">{format_rupiah(signed(summary.total_income))}</p>
            </div>
            <div class={card.clone()}>
                <p class="summary-label">{"Pengeluaran"}</p>
                <p class="summary-amount">{format_rupiah(signed(summary.total_expense))}</p>
            </div>
            <div class={classes!(card, "summary-balance", (summary.balance < 0).then_some("negative"))}>
                <p class="summary-label">{"Sisa Dana Tersedia"}</p>
                <p class="summary-amount">{format_rupiah(summary.balance)}</p>
            </div>
        </div>
    }
}
