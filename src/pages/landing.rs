use colored::Colorize;

use super::shell;

struct Section {
    title: &'static str,
    intro: &'static str,
    blocks: &'static [(&'static str, &'static [&'static str])],
}

const HERO_TITLE: &str = "Transforma tu proceso de reclutamiento con IA";
const HERO_BODY: &str = "Conecta talento excepcional con oportunidades ideales. Nuestra plataforma inteligente optimiza el reclutamiento para PYMEs, reduciendo tiempo y costos mientras mejora la calidad de las contrataciones.";

const SECTIONS: [Section; 3] = [
    Section {
        title: "El Desafío del Reclutamiento",
        intro: "Las PYMEs enfrentan procesos de contratación ineficientes que consumen tiempo valioso y recursos limitados, dificultando encontrar el talento adecuado.",
        blocks: &[
            (
                "Problemas Actuales",
                &[
                    "• Filtrado manual de cientos de hojas de vida",
                    "• Falta de herramientas para evaluar habilidades técnicas",
                    "• Procesos largos y costosos de entrevistas",
                    "• Decisiones basadas en información incompleta",
                ],
            ),
            (
                "Nuestra Solución",
                &[
                    "✓ Análisis automático e inteligente de CVs",
                    "✓ Entrevistas adaptativas con IA conversacional",
                    "✓ Evaluación objetiva de habilidades y compatibilidad",
                    "✓ Recomendaciones basadas en datos y machine learning",
                ],
            ),
        ],
    },
    Section {
        title: "Beneficios para Todos",
        intro: "Una plataforma diseñada para conectar empresas con talento de forma eficiente y justa.",
        blocks: &[
            (
                "Para Candidatos",
                &[
                    "Proceso Rápido: postula en minutos y recibe feedback inmediato",
                    "Evaluación Justa: análisis objetivo basado en habilidades y experiencia",
                    "Entrevista Inteligente: chatbot que se adapta a tu perfil y experiencia",
                ],
            ),
            (
                "Para Empresas",
                &[
                    "Ahorro de Tiempo: reduce el proceso de selección en hasta 70%",
                    "Mejores Contrataciones: IA recomienda los candidatos más compatibles",
                    "Fácil Gestión: panel intuitivo para administrar vacantes y candidatos",
                ],
            ),
        ],
    },
    Section {
        title: "Tecnología Open-Source",
        intro: "Construido con modelos de IA de código abierto y datos curados para garantizar transparencia, seguridad y mejora continua.",
        blocks: &[
            (
                "Modelos Open-Source",
                &["Utilizamos modelos de IA de última generación, transparentes y verificables"],
            ),
            (
                "Datos Curados",
                &["Dataset de CVs anonimizados y descripciones de cargos para entrenar la IA"],
            ),
            (
                "Efecto de Red",
                &["La plataforma mejora continuamente con cada empresa y candidato que participa"],
            ),
        ],
    },
];

const CTA_TITLE: &str = "¿Listo para transformar tu reclutamiento?";
const CTA_BODY: &str = "Únete a las empresas que están revolucionando su proceso de contratación con inteligencia artificial.";

pub fn render() -> String {
    let mut out = shell::banner();

    out.push_str(&format!("\n\n{}\n{}\n", HERO_TITLE.bold(), HERO_BODY));
    out.push_str(&call_to_action("Soy Candidato", "Soy Empresa"));

    for section in &SECTIONS {
        out.push_str(&shell::heading(section.title, section.intro));
        for (title, lines) in section.blocks {
            out.push_str(&format!("\n  {}\n", title.bold()));
            for line in lines.iter() {
                out.push_str(&format!("    {line}\n"));
            }
        }
    }

    out.push_str(&shell::heading(CTA_TITLE, CTA_BODY));
    out.push_str(&call_to_action("Buscar Oportunidades", "Publicar Vacante"));
    out.push('\n');
    out.push_str(&shell::footer());
    out
}

fn call_to_action(candidate: &str, company: &str) -> String {
    format!(
        "\n  {} {}\n  {} {}\n",
        format!("👤 {candidate}:").green().bold(),
        "recruitia jobs".yellow(),
        format!("🏢 {company}:").green().bold(),
        "recruitia company".yellow()
    )
}

pub fn show() {
    println!("{}", render());
}
