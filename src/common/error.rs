// src/common/error.rs

use thiserror::Error;

// Falha vinda da capacidade remota (list/create/update/delete). O transporte
// em si não mora neste crate; quem implementa `RecursoRemoto` converte o
// erro concreto (HTTP, socket, o que for) para uma destas variantes.
#[derive(Debug, Error)]
pub enum ErroRemoto {
    #[error("Falha de transporte: {0}")]
    Transporte(#[source] anyhow::Error),

    #[error("O servidor rejeitou a operação: {0}")]
    Rejeitado(String),

    // Resposta que não desserializa no formato esperado (nem paginada,
    // nem array puro).
    #[error("Resposta inesperada do servidor")]
    RespostaInvalida(#[from] serde_json::Error),
}

// Nosso tipo de erro, com `thiserror` para melhor ergonomia. As mensagens
// são as exibidas ao usuário do painel.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    Validacao(#[from] validator::ValidationErrors),

    #[error("O campo '{0}' é obrigatório.")]
    CampoObrigatorio(&'static str),

    #[error("Por favor, selecione uma unidade para o setor.")]
    SetorSemUnidade,

    #[error("Não é possível criar setores sem unidades. Por favor, cadastre uma unidade primeiro.")]
    SemUnidades,

    #[error("Acesso negado: {0}")]
    Autorizacao(String),

    #[error("Nenhum cliente em edição.")]
    SessaoInvalida,

    #[error("Nenhum modal aberto.")]
    ModalFechado,

    #[error("Erro remoto")]
    Remoto(#[from] ErroRemoto),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    Interno(#[from] anyhow::Error),
}

impl AppError {
    /// Verdadeiro para erros que nunca chegam ao remoto (validação e
    /// pré-condições locais).
    pub fn e_validacao(&self) -> bool {
        matches!(
            self,
            AppError::Validacao(_)
                | AppError::CampoObrigatorio(_)
                | AppError::SetorSemUnidade
                | AppError::SemUnidades
        )
    }
}
