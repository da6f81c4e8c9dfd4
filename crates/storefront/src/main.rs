//! Demo walk-through of the storefront core.
//!
//! Renders a price breakdown for every catalog product in both regions, runs
//! one assistant exchange through the fallback decorator, submits a stub
//! order and queries the tracking stub. Plain stdout; the real presentation
//! layer lives elsewhere.

use anyhow::Result;

use iglobal_assistant::{Assistant, AssistantContext, FallbackAssistant, ScriptedAssistant};
use iglobal_catalog::{products, validate_catalog};
use iglobal_core::Region;
use iglobal_i18n::Translations;
use iglobal_orders::{LocalOrderIntake, OrderIntake, ShippingDetails, track};
use iglobal_pricing::settlement_rates;
use iglobal_storefront::StorefrontState;

fn main() -> Result<()> {
    iglobal_observability::init();

    let rates = settlement_rates();
    let regions: Vec<Region> = rates.keys().copied().collect();
    validate_catalog(products(), &regions)?;
    tracing::info!(models = products().len(), "catalog validated");

    let mut state = StorefrontState::new();
    let copy = Translations::for_language(state.language);
    println!("{}", copy.title);
    println!("{}\n", copy.subtitle);

    for product in products() {
        state.select_product(&product.id)?;
        println!("{} ({})", product.name, product.spec_summary);
        for (region, rate) in rates {
            state.set_region(*region);
            let quote = state.quote()?;
            let base = product
                .base_price(*region)
                .ok_or_else(|| anyhow::anyhow!("catalog not priced for {region}"))?;
            println!(
                "  {} {}{base}  {}: ¥{}  {}: ¥{}  {}: ¥{}",
                copy.region_name(*region),
                rate.currency_symbol,
                copy.price_details,
                quote.subtotal,
                copy.service_fee,
                quote.fee,
                copy.est_total,
                quote.total,
            );
        }
        println!("{}\n", copy.shipping_note);
    }

    let assistant = FallbackAssistant::new(ScriptedAssistant::new(
        "对比下来，iPhone 17 Pro Max 的续航和长焦最强。",
    ));
    let context = AssistantContext {
        region: state.region,
        language: state.language,
    };
    let reply = assistant.advise("iPhone 17 系列哪款最值得买？", &context)?;
    println!("{}: {}\n", copy.chat_title, reply.content);

    let quote = state.quote()?;
    let receipt = LocalOrderIntake.submit(
        &ShippingDetails {
            full_name: "陈伟".to_string(),
            phone: "+86 138 0000 0000".to_string(),
            address: "上海市南京路 88 号".to_string(),
        },
        quote,
    )?;
    println!("{} #{}", copy.order_success, receipt.order_id);
    println!("{}\n", copy.order_success_desc);

    let status = track("IG12345")?;
    println!("{}: {status:?} ({})", copy.track_status, copy.in_transit);

    Ok(())
}
