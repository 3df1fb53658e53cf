// src/services/modal.rs

use serde_json::{Map, Value};

use crate::common::error::AppError;
use crate::models::clientes::{TipoEntidade, Unidade};

/// O fluxo genérico de adicionar/editar uma entidade dependente. Guarda o
/// tipo aberto e uma cópia de trabalho dos campos; só um modal existe por
/// vez. O rascunho vive aqui até ser persistido ou descartado.
#[derive(Debug, Default)]
pub struct EditorModal {
    aberto: Option<TipoEntidade>,
    rascunho: Map<String, Value>,
}

impl EditorModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abre o modal para o tipo, com os campos de um registro existente ou
    /// vazio para criação. Abrir de novo substitui o rascunho anterior.
    pub fn abrir(&mut self, tipo: TipoEntidade, registro: Value) {
        self.aberto = Some(tipo);
        self.rascunho = match registro {
            Value::Object(campos) => campos,
            _ => Map::new(),
        };
    }

    pub fn fechar(&mut self) {
        self.aberto = None;
        self.rascunho = Map::new();
    }

    pub fn aberto(&self) -> Option<TipoEntidade> {
        self.aberto
    }

    pub fn rascunho(&self) -> &Map<String, Value> {
        &self.rascunho
    }

    pub fn definir_campo(&mut self, nome: &str, valor: Value) {
        self.rascunho.insert(nome.to_string(), valor);
    }

    /// Id do registro em edição; `None` num rascunho de criação.
    pub fn id_em_edicao(&self) -> Option<i64> {
        self.rascunho.get("id").and_then(Value::as_i64)
    }

    /// Título do modal ("Novo Contrato", "Editar Setor", ...).
    pub fn titulo(&self) -> Option<String> {
        let tipo = self.aberto?;
        let acao = if self.id_em_edicao().is_some() {
            "Editar"
        } else {
            "Novo"
        };
        Some(format!("{acao} {tipo}"))
    }

    /// Valida o rascunho contra o esquema do tipo e monta o payload a
    /// persistir, anexando o cliente dono (e a unidade, para setores).
    /// Nada chega ao remoto enquanto houver erro aqui.
    pub fn montar_dados(
        &self,
        cliente_id: i64,
        unidades: &[Unidade],
    ) -> Result<(TipoEntidade, Value), AppError> {
        let tipo = self.aberto.ok_or(AppError::ModalFechado)?;

        if tipo == TipoEntidade::Setor {
            // A pré-condição vem antes da presença do campo: sem unidade
            // cadastrada, a mensagem útil é "cadastre uma unidade", não
            // "selecione uma unidade".
            if unidades.is_empty() {
                return Err(AppError::SemUnidades);
            }
            if !campo_preenchido(self.rascunho.get("unidade")) {
                return Err(AppError::SetorSemUnidade);
            }
        }

        for campo in tipo.campos() {
            if campo.obrigatorio && !campo_preenchido(self.rascunho.get(campo.nome)) {
                return Err(AppError::CampoObrigatorio(campo.rotulo));
            }
        }

        let mut dados = self.rascunho.clone();
        dados.insert("cliente".into(), Value::from(cliente_id));
        if tipo == TipoEntidade::Setor {
            if let Some(unidade) = self.rascunho.get("unidade") {
                dados.insert("unidade".into(), unidade.clone());
            }
        }

        Ok((tipo, Value::Object(dados)))
    }
}

// Presente, não-nulo e, quando texto, não-vazio. O seletor de unidade
// envia o id como string, então as duas formas contam como preenchidas.
fn campo_preenchido(valor: Option<&Value>) -> bool {
    match valor {
        None | Some(Value::Null) => false,
        Some(Value::String(texto)) => !texto.trim().is_empty(),
        Some(_) => true,
    }
}
