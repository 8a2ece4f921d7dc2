//! `cart` command

use std::io;

use anyhow::{Context, bail};
use clap::Args;
use showroom::{
    cart::{CartIntent, store::CartStore},
    fixtures::Fixture,
    ids::ProductId,
    report::write_cart,
};
use tracing::info;

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Product fixture set
    #[arg(short, long, default_value = "storefront")]
    set: String,

    /// Intents to apply in order: `add:ID`, `remove:ID`, `set:ID=QTY`, `clear`, `toggle`,
    /// `open` or `close`
    #[arg(value_name = "INTENT")]
    intents: Vec<String>,
}

fn parse_intent<'a>(fixture: &Fixture<'a>, raw: &str) -> anyhow::Result<CartIntent<'a>> {
    let (verb, arg) = raw.split_once(':').unwrap_or((raw, ""));

    let intent = match verb {
        "add" => CartIntent::AddItem(fixture.product(arg)?.clone()),
        "remove" => CartIntent::RemoveItem(ProductId::new(arg)),
        "set" => {
            let (id, quantity) = arg
                .split_once('=')
                .with_context(|| format!("expected set:ID=QTY, got '{raw}'"))?;

            CartIntent::UpdateQuantity {
                id: ProductId::new(id),
                quantity: quantity
                    .parse()
                    .with_context(|| format!("invalid quantity in '{raw}'"))?,
            }
        }
        "clear" => CartIntent::ClearCart,
        "toggle" => CartIntent::ToggleCart,
        "open" => CartIntent::OpenCart,
        "close" => CartIntent::CloseCart,
        _ => bail!("unknown cart intent '{raw}'"),
    };

    Ok(intent)
}

pub(crate) fn run(mut fixture: Fixture<'static>, args: &CartArgs) -> anyhow::Result<()> {
    fixture
        .load_products(&args.set)
        .with_context(|| format!("failed to load product set '{}'", args.set))?;

    let mut store = CartStore::new(fixture.cart()?);

    store.subscribe(|state| {
        info!(
            lines = state.items().len(),
            items = state.total_item_count(),
            "cart changed"
        );
    });

    for raw in &args.intents {
        store.dispatch(parse_intent(&fixture, raw)?);
    }

    let mut handle = io::stdout().lock();

    write_cart(&mut handle, store.state())?;

    Ok(())
}
