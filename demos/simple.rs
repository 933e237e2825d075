use cleancolumns::{config, make, make_lang};

fn main() {
    // ────────────────────────────────────────────────────────────────
    // Any script → ASCII column name
    // ────────────────────────────────────────────────────────────────
    println!("{}", make("Hellö Wörld хелло ворлд"));
    // → hello_world_khello_vorld

    println!("{}", make("影師"));
    // → ying_shi

    // ────────────────────────────────────────────────────────────────
    // Language-specific symbols
    // ────────────────────────────────────────────────────────────────
    println!("{}", make_lang("This & that", "en"));
    // → this_and_that

    println!("{}", make_lang("Diese & Dass", "de"));
    // → diese_und_dass

    // ────────────────────────────────────────────────────────────────
    // Process-wide custom substitutions
    // ────────────────────────────────────────────────────────────────
    config::update_global(|cfg| {
        cfg.sub.insert("water".into(), "sand".into());
    });
    println!("{}", make("water is hot"));
    // → sand_is_hot

    config::update_global(|cfg| cfg.max_length = 12);
    println!("{}", make("water is hot and the sun is bright"));
    // → sand_is_hot

    config::reset_global();
}
