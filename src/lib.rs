// src/lib.rs
//
// Núcleo de orquestração do gerenciamento de clientes: lista de clientes,
// sessão de edição do agregado (cliente + seis coleções dependentes),
// modais genéricos de entidade e regras de acesso. A camada de transporte,
// a autenticação e a interface visual ficam fora deste crate e entram
// pelas traits de `api`, `auth` e `notificacao`.

pub mod api;
pub mod auth;
pub mod common;
pub mod config;
pub mod models;
pub mod notificacao;
pub mod services;

// Reexports principais
pub use common::error::{AppError, ErroRemoto};
pub use config::ConfiguracaoPainel;
pub use services::painel::PainelClientes;
