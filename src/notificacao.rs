// src/notificacao.rs
//
// Canal de avisos ao usuário (toasts) e confirmação de exclusão. A camada
// visual implementa; o painel só emite.

/// Identificador de um aviso em exibição, devolvido por `carregando` para
/// poder ser dispensado depois.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdAviso(pub u64);

pub trait CanalNotificacao: Send + Sync {
    /// Mostra um aviso persistente de operação em andamento.
    fn carregando(&self, mensagem: &str) -> IdAviso;
    fn sucesso(&self, mensagem: &str);
    fn erro(&self, mensagem: &str);
    fn dispensar(&self, id: IdAviso);
}

/// Pergunta ao usuário antes de qualquer exclusão.
pub trait ConfirmacaoExclusao: Send + Sync {
    fn confirmar(&self, mensagem: &str) -> bool;
}

/// Descarta todos os avisos. Útil em ambientes sem interface.
pub struct NotificacaoNula;

impl CanalNotificacao for NotificacaoNula {
    fn carregando(&self, _mensagem: &str) -> IdAviso {
        IdAviso(0)
    }

    fn sucesso(&self, _mensagem: &str) {}

    fn erro(&self, _mensagem: &str) {}

    fn dispensar(&self, _id: IdAviso) {}
}

/// Nega toda confirmação: sem interface, nenhuma exclusão prossegue.
pub struct ConfirmacaoNegada;

impl ConfirmacaoExclusao for ConfirmacaoNegada {
    fn confirmar(&self, _mensagem: &str) -> bool {
        false
    }
}
