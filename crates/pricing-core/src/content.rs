//! Static Section Content
//!
//! Business-model comparison table and the copy around it. Fixed text, no
//! per-row logic.

use serde::Serialize;

/// One segment row of the comparison table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub segment: &'static str,
    pub value_proposition: &'static str,
    pub revenue_model: &'static str,
    pub technical_notes: &'static str,
}

impl ComparisonRow {
    /// Cells in column order
    pub fn cells(&self) -> [&'static str; 4] {
        [
            self.segment,
            self.value_proposition,
            self.revenue_model,
            self.technical_notes,
        ]
    }
}

/// Segment comparison table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub columns: [&'static str; 4],
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn standard() -> Self {
        Self {
            columns: [
                "Segmento",
                "Proposta de Valor",
                "Modelo de Receita",
                "Observações técnicas",
            ],
            rows: vec![
                ComparisonRow {
                    segment: "B2B",
                    value_proposition: "Acesso gratuito com limites (ex: 2h/mês)",
                    revenue_model: "Freemium + Pagamento por uso",
                    technical_notes: "Cobrança via cartão ou Pix, via app",
                },
                ComparisonRow {
                    segment: "B2C",
                    value_proposition: "Licença institucional",
                    revenue_model: "Licenciamento anual ou por aluno/mês",
                    technical_notes: "Acesso personalizado com API/portal",
                },
            ],
        }
    }
}

impl Default for ComparisonTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Headings and paragraphs surrounding the table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    pub title: &'static str,
    pub lead: &'static str,
    pub cost_heading: &'static str,
    pub cost_lines: Vec<&'static str>,
    /// Emphasized summary under the cost lines
    pub cost_summary: &'static str,
    pub audience_heading: &'static str,
    pub audience: Vec<&'static str>,
}

impl SectionCopy {
    pub fn standard() -> Self {
        Self {
            title: "Modelo de Negócio",
            lead: "O modelo de negócio da nossa plataforma é baseado na cobrança \
                   recorrente e por consumo, com público tanto B2B quanto B2C.",
            cost_heading: "Custos de Transcrição por Hora:",
            cost_lines: vec![
                "US$ 0,016 por hora",
                "R$ 0,016 × 5,68 = R$ 0,09088 por hora ou seja,",
            ],
            cost_summary: "~9 centavos por hora de áudio",
            audience_heading: "Público-Alvo:",
            audience: vec![
                "Ensino Médio, Técnico, Superior e Pós",
                "Instituições de ensino e eventos educacionais",
                "Universidades públicas e privadas",
                "Escolas técnicas",
                "Plataformas EAD",
                "Organizadores de congressos, simpósios e seminários acessíveis",
            ],
        }
    }
}

impl Default for SectionCopy {
    fn default() -> Self {
        Self::standard()
    }
}
