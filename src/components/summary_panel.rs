//! Progress and Cost Summary Components

use leptos::prelude::*;

use crate::checklist::{format_rupiah, CostSummary, Progress};
use crate::context::use_checklist;
use crate::store::ChecklistStateStoreFields;

/// Completion counter, percentage badge and progress bar
#[component]
pub fn ProgressPanel() -> impl IntoView {
    let store = use_checklist().store;
    let progress = Memo::new(move |_| store.items().with(|items| Progress::of(items)));

    view! {
        <div class="mb-3">
            <div class="d-flex justify-content-between align-items-center mb-2">
                <span>
                    {move || {
                        let p = progress.get();
                        format!("Progress: {}/{} items completed", p.done, p.total)
                    }}
                </span>
                <span class="badge bg-primary">{move || format!("{}%", progress.get().percentage())}</span>
            </div>
            <div class="progress">
                <div
                    class="progress-bar"
                    role="progressbar"
                    style=move || format!("width: {}%;", progress.get().ratio())
                ></div>
            </div>
        </div>
    }
}

/// Total, completed and remaining cost
#[component]
pub fn CostCards() -> impl IntoView {
    let store = use_checklist().store;
    let summary = Memo::new(move |_| store.items().with(|items| CostSummary::of(items)));

    view! {
        <div class="row mb-4">
            <CostCard title="Total Biaya" class="card-text fs-4 text-primary" amount=Signal::derive(move || summary.get().total) />
            <CostCard title="Biaya Selesai" class="card-text fs-4 text-success" amount=Signal::derive(move || summary.get().completed) />
            <CostCard title="Sisa Biaya" class="card-text fs-4 text-warning" amount=Signal::derive(move || summary.get().remaining) />
        </div>
    }
}

#[component]
fn CostCard(title: &'static str, class: &'static str, amount: Signal<f64>) -> impl IntoView {
    view! {
        <div class="col-md-4">
            <div class="card text-center">
                <div class="card-body">
                    <h5 class="card-title">{title}</h5>
                    <p class=class>{move || format_rupiah(amount.get())}</p>
                </div>
            </div>
        </div>
    }
}
