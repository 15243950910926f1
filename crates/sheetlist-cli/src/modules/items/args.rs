use clap::Args;

#[derive(Args)]
pub struct AddArgs {
    pub name: String,
    #[arg(long)]
    pub quantity: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Item id as printed by `list` (e.g. item_3_Eggs)")]
    pub id: String,
}

#[derive(Args)]
pub struct ReorderArgs {
    #[arg(required = true, help = "Every current item id, in the desired order")]
    pub ids: Vec<String>,
}
