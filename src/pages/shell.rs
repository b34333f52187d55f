use colored::Colorize;

pub const BRAND: &str = "RecruitIA";
pub const TAGLINE: &str = "Conectando talento con oportunidades a través de inteligencia artificial.";
pub const CONTACT_EMAIL: &str = "contacto@recruitia.com";

/// Subcommands standing in for the navigation links.
const NAV: [(&str, &str); 3] = [
    ("Inicio", "recruitia home"),
    ("Candidatos", "recruitia jobs"),
    ("Empresas", "recruitia company"),
];

pub fn banner() -> String {
    let links: Vec<String> = NAV
        .iter()
        .map(|(label, command)| format!("{} {}", label.bold(), format!("({command})").dimmed()))
        .collect();

    format!(
        "{}\n{}\n{}",
        format!("💼 {BRAND}").cyan().bold(),
        links.join("  ·  "),
        "─".repeat(60).dimmed()
    )
}

pub fn footer() -> String {
    let columns = [
        ("Plataforma", vec!["Para Candidatos", "Para Empresas", "Cómo funciona"]),
        ("Recursos", vec!["Blog", "Guías", "FAQ"]),
        ("Contacto", vec![CONTACT_EMAIL]),
    ];

    let mut out = format!("{}\n{}\n{}\n", "─".repeat(60).dimmed(), BRAND.cyan().bold(), TAGLINE);
    for (title, items) in columns {
        out.push_str(&format!("\n{}\n", title.bold()));
        for item in items {
            out.push_str(&format!("  {item}\n"));
        }
    }
    out.push_str(&format!(
        "\n{}",
        "© 2024 RecruitIA. Todos los derechos reservados.".dimmed()
    ));
    out
}

pub fn heading(title: &str, subtitle: &str) -> String {
    format!("\n{}\n{}\n", title.cyan().bold(), subtitle.dimmed())
}
