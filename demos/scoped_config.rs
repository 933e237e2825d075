use std::thread;

use cleancolumns::{DEU, POL, SPA, Slugger};

fn main() {
    // Each slugger owns its configuration, so no global state is shared.
    let sluggers = [
        Slugger::builder().lang(DEU).sub("Nr.", "nummer").build(),
        Slugger::builder().lang(POL).max_length(10).build(),
        Slugger::builder()
            .lang(SPA)
            .rune_sub('€', "euros")
            .sub_ordered("Importe", "total")
            .build(),
    ];

    let labels = ["Kunden-Nr. & Name", "Zażółć gęślą jaźń", "Importe (€) & IVA"];

    let handles: Vec<_> = sluggers
        .into_iter()
        .zip(labels)
        .map(|(slugger, label)| {
            thread::spawn(move || format!("{:>2}: {label:?} → {}", slugger.lang(), slugger.make(label)))
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(line) => println!("{line}"),
            Err(_) => eprintln!("slugger thread panicked"),
        }
    }
    // de: "Kunden-Nr. & Name" → kunden-nummer_und_name
    // pl: "Zażółć gęślą jaźń" → zazolc
    // es: "Importe (€) & IVA" → total_euros_y_iva
}
