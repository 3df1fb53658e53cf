// src/auth.rs
//
// O painel não autentica ninguém: ele recebe um predicado de grupos do
// usuário já autenticado e decide, via `PoliticaAcesso`, quem gerencia e
// quem exclui. A mecânica de login/token fica fora do crate.

use crate::config::ConfiguracaoPainel;

/// Predicado de papéis do usuário da sessão.
pub trait ProvedorAutorizacao: Send + Sync {
    fn possui_grupo(&self, grupo: &str) -> bool;

    /// Verdadeiro se o usuário possui pelo menos um dos grupos.
    fn possui_algum(&self, grupos: &[String]) -> bool {
        grupos.iter().any(|grupo| self.possui_grupo(grupo))
    }
}

// Excluir é mais privilegiado do que criar/editar: a gestão aceita
// qualquer grupo da lista, a exclusão exige o grupo dedicado.
#[derive(Debug, Clone)]
pub struct PoliticaAcesso {
    grupos_gestao: Vec<String>,
    grupo_exclusao: String,
}

impl PoliticaAcesso {
    pub fn new(config: &ConfiguracaoPainel) -> Self {
        Self {
            grupos_gestao: config.grupos_gestao.clone(),
            grupo_exclusao: config.grupo_exclusao.clone(),
        }
    }

    pub fn pode_gerenciar(&self, auth: &dyn ProvedorAutorizacao) -> bool {
        auth.possui_algum(&self.grupos_gestao)
    }

    pub fn pode_excluir(&self, auth: &dyn ProvedorAutorizacao) -> bool {
        auth.possui_grupo(&self.grupo_exclusao)
    }
}
