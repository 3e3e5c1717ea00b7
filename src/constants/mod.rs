pub mod question_bank;

pub use question_bank::question_bank;

/// Collection endpoint for finished lead+result submissions. Overridable
/// through `WEBHOOK_URL`.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://services.leadconnectorhq.com/hooks/5lW9H78EAU69NXo9PRBu/webhook-trigger/481ac351-2ebb-4287-8777-476e311de54f";
