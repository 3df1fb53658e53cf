// src/api/mod.rs
//
// A fronteira remota do painel: cada coleção (clientes e as seis
// dependentes) é acessada por uma capacidade uniforme de
// list/create/update/delete. O transporte concreto fica fora do crate.

pub mod registro;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::common::error::ErroRemoto;

// --- FILTRO DE LISTAGEM ---

// Parâmetros de consulta aceitos pelo `listar`. Para a lista de clientes o
// filtro vai vazio; para as coleções dependentes vai o dono.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FiltroLista {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
}

impl FiltroLista {
    pub fn por_cliente(cliente_id: i64) -> Self {
        Self {
            cliente_id: Some(cliente_id),
        }
    }
}

// --- CAPACIDADE REMOTA ---

/// Acesso remoto a uma coleção. Os payloads trafegam como JSON cru; a
/// tipagem acontece na borda de quem consome (ver `desembrulhar_lista`).
#[async_trait]
pub trait RecursoRemoto: Send + Sync {
    async fn listar(&self, filtro: FiltroLista) -> Result<Value, ErroRemoto>;
    async fn criar(&self, dados: Value) -> Result<Value, ErroRemoto>;
    async fn atualizar(&self, id: i64, dados: Value) -> Result<Value, ErroRemoto>;
    async fn excluir(&self, id: i64) -> Result<(), ErroRemoto>;
}

/// Implementação nula, para montar ambientes parciais (testes de um único
/// recurso, protótipos). Toda operação falha com transporte indisponível.
pub struct RecursoIndisponivel;

#[async_trait]
impl RecursoRemoto for RecursoIndisponivel {
    async fn listar(&self, _filtro: FiltroLista) -> Result<Value, ErroRemoto> {
        Err(ErroRemoto::Transporte(anyhow!("recurso remoto indisponível")))
    }

    async fn criar(&self, _dados: Value) -> Result<Value, ErroRemoto> {
        Err(ErroRemoto::Transporte(anyhow!("recurso remoto indisponível")))
    }

    async fn atualizar(&self, _id: i64, _dados: Value) -> Result<Value, ErroRemoto> {
        Err(ErroRemoto::Transporte(anyhow!("recurso remoto indisponível")))
    }

    async fn excluir(&self, _id: i64) -> Result<(), ErroRemoto> {
        Err(ErroRemoto::Transporte(anyhow!("recurso remoto indisponível")))
    }
}

// --- NORMALIZAÇÃO DAS RESPOSTAS DE LISTAGEM ---

// O backend responde paginado ({ "count": n, "results": [...] }) ou com o
// array puro, dependendo do endpoint. As duas formas são aceitas para
// todas as coleções, sempre pela mesma rotina.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RespostaLista<T> {
    Paginada { results: Vec<T> },
    Plana(Vec<T>),
}

pub fn desembrulhar_lista<T: DeserializeOwned>(resposta: Value) -> Result<Vec<T>, ErroRemoto> {
    let lista: RespostaLista<T> = serde_json::from_value(resposta)?;
    Ok(match lista {
        RespostaLista::Paginada { results } => results,
        RespostaLista::Plana(itens) => itens,
    })
}
