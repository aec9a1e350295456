//! Отчёт по партиям: партии, общий остаток, распределение по складам
use crate::shared::components::ui::{status_variant, Badge};
use crate::shared::icons::icon;
use contracts::domain::a101_inventory_product::InventoryProduct;
use contracts::domain::a102_product_batch::ProductBatch;
use contracts::domain::a105_stock_distribution::StockDistribution;
use contracts::shared::format::{format_grouped, format_inr, format_short_date};
use contracts::shared::list_engine::predicates::{
    batch_stock_total, distribution_share_percent, stock_fill_percent,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BatchReportPanel(
    product: InventoryProduct,
    batches: Vec<ProductBatch>,
    distribution: Vec<StockDistribution>,
    on_close: Callback<()>,
) -> impl IntoView {
    let total_stock = batch_stock_total(&batches);

    view! {
        <div class="batch-report">
            <div class="batch-report__header">
                <h2 class="batch-report__title">"Product Batch Wise Report"</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(()) title="Close">
                    {icon("x")}
                </button>
            </div>

            <div class="batch-report__summary">
                <img class="batch-report__image" src=product.image.clone() alt=product.name.clone() />
                <div class="batch-report__product">
                    <h3>{product.name.clone()}</h3>
                    <p class="table__hint">
                        {format!("SKU: {} · Category: {}", product.sku, product.category)}
                    </p>
                </div>
                <div class="batch-report__stat">
                    <p class="batch-report__stat-label">"Total Available Stock"</p>
                    <p class="batch-report__stat-value">{format_grouped(total_stock)}</p>
                    <p class="table__hint">"Units"</p>
                </div>
                <div class="batch-report__stat">
                    <p class="batch-report__stat-label">"Active Batches"</p>
                    <p class="batch-report__stat-value">{product.active_batches}</p>
                </div>
            </div>

            <h4 class="batch-report__section">"Batch Details"</h4>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Batch #"</TableHeaderCell>
                        <TableHeaderCell>"Vendor"</TableHeaderCell>
                        <TableHeaderCell>"Entry Date"</TableHeaderCell>
                        <TableHeaderCell>"Expiry Date"</TableHeaderCell>
                        <TableHeaderCell>"Cost Price"</TableHeaderCell>
                        <TableHeaderCell>"Current Stock"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {batches
                        .into_iter()
                        .map(|batch| view! {
                            <TableRow>
                                <TableCell>
                                    <span class="table__mono">{batch.batch_number.clone()}</span>
                                </TableCell>
                                <TableCell>{batch.vendor.clone()}</TableCell>
                                <TableCell>{format_short_date(&batch.entry_date)}</TableCell>
                                <TableCell>{format_short_date(&batch.expiry_date)}</TableCell>
                                <TableCell>{format_inr(batch.cost_price)}</TableCell>
                                <TableCell>{batch.current_stock}</TableCell>
                                <TableCell>
                                    <Badge variant=status_variant(batch.status.code())>
                                        {batch.status.display_name()}
                                    </Badge>
                                </TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>

            <StockDistributionBars rows=distribution />
        </div>
    }
}

#[component]
fn StockDistributionBars(rows: Vec<StockDistribution>) -> impl IntoView {
    if rows.is_empty() {
        return ().into_any();
    }
    let grand_total: i64 = rows.iter().map(|r| r.total).sum();

    view! {
        <div class="stock-distribution">
            <h3 class="batch-report__section">"Stock Distribution"</h3>
            <p class="table__hint">"Inventory levels across active warehouse locations"</p>
            {rows
                .into_iter()
                .map(|row| {
                    let share = distribution_share_percent(row.total, grand_total);
                    let primary = format!("width: {:.1}%;", stock_fill_percent(row.primary, grand_total));
                    let buffer = format!("width: {:.1}%;", stock_fill_percent(row.buffer, grand_total));
                    view! {
                        <div class="stock-distribution__row">
                            <div class="stock-distribution__caption">
                                <span>{row.location.clone()}</span>
                                <span>
                                    {format!("{} Units", format_grouped(row.total))}
                                    <small>{format!(" ({}%)", share)}</small>
                                </span>
                            </div>
                            <div class="stock-distribution__bar">
                                <div class="stock-distribution__primary" style=primary></div>
                                <div class="stock-distribution__buffer" style=buffer></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
