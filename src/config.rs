// src/config.rs

use std::env;

// Configuração do painel. Os nomes de grupo vêm do servidor de
// autenticação e podem ser renomeados por instalação, então aceitamos
// override por variável de ambiente.
#[derive(Debug, Clone)]
pub struct ConfiguracaoPainel {
    /// Grupos autorizados a gerenciar clientes.
    pub grupos_gestao: Vec<String>,
    /// Grupo autorizado a excluir clientes e itens dependentes.
    pub grupo_exclusao: String,
}

impl Default for ConfiguracaoPainel {
    fn default() -> Self {
        Self {
            grupos_gestao: vec!["Administrador".into(), "Superior".into()],
            grupo_exclusao: "Administrador".into(),
        }
    }
}

impl ConfiguracaoPainel {
    /// Carrega a configuração do ambiente. Em desenvolvimento o `.env` é
    /// opcional; na ausência das variáveis valem os grupos padrão.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let padrao = Self::default();
        let grupos_gestao = env::var("PAINEL_GRUPOS_GESTAO")
            .map(|valor| dividir_grupos(&valor))
            .ok()
            .filter(|grupos| !grupos.is_empty())
            .unwrap_or(padrao.grupos_gestao);
        let grupo_exclusao =
            env::var("PAINEL_GRUPO_EXCLUSAO").unwrap_or(padrao.grupo_exclusao);

        tracing::debug!(
            grupos_gestao = ?grupos_gestao,
            grupo_exclusao = %grupo_exclusao,
            "configuração do painel carregada"
        );

        Self {
            grupos_gestao,
            grupo_exclusao,
        }
    }
}

// Lista separada por vírgula, com espaços tolerados ("Administrador, Superior").
fn dividir_grupos(valor: &str) -> Vec<String> {
    valor
        .split(',')
        .map(|grupo| grupo.trim().to_string())
        .filter(|grupo| !grupo.is_empty())
        .collect()
}
