// src/services/carregador.rs

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{FiltroLista, RecursoRemoto, desembrulhar_lista, registro::RegistroApis};
use crate::common::error::AppError;
use crate::models::clientes::{
    Aprovador, ColecoesDependentes, Contrato, OpcaoEspecCq, Setor, Solicitante, Unidade,
};

/// Carrega o snapshot completo das seis coleções dependentes de um cliente.
#[derive(Clone)]
pub struct CarregadorDependentes {
    registro: RegistroApis,
}

impl CarregadorDependentes {
    pub fn new(registro: RegistroApis) -> Self {
        Self { registro }
    }

    /// Busca as cinco coleções independentes em paralelo e, com as
    /// unidades em mãos, decide a busca de setores: sem unidade cadastrada
    /// não há setor possível, então nenhuma chamada é feita. Qualquer
    /// falha aborta o snapshot inteiro — o chamador fica com o anterior.
    pub async fn carregar_tudo(
        &self,
        cliente_id: i64,
    ) -> Result<ColecoesDependentes, AppError> {
        let filtro = FiltroLista::por_cliente(cliente_id);

        let (contratos, unidades, aprovadores, solicitantes, opcoes_espec_cq) = tokio::try_join!(
            listar::<Contrato>(&self.registro.contratos, filtro),
            listar::<Unidade>(&self.registro.unidades, filtro),
            listar::<Aprovador>(&self.registro.aprovadores, filtro),
            listar::<Solicitante>(&self.registro.solicitantes, filtro),
            listar::<OpcaoEspecCq>(&self.registro.opcoes_espec_cq, filtro),
        )?;

        // Os setores são buscados uma vez por cliente (não por unidade);
        // o agrupamento por unidade acontece depois, em memória.
        let setores = if unidades.is_empty() {
            Vec::new()
        } else {
            listar::<Setor>(&self.registro.setores, filtro).await?
        };

        tracing::debug!(
            cliente_id,
            contratos = contratos.len(),
            unidades = unidades.len(),
            setores = setores.len(),
            "snapshot de dependentes carregado"
        );

        Ok(ColecoesDependentes {
            contratos,
            unidades,
            setores,
            aprovadores,
            solicitantes,
            opcoes_espec_cq,
        })
    }
}

async fn listar<T: DeserializeOwned>(
    recurso: &Arc<dyn RecursoRemoto>,
    filtro: FiltroLista,
) -> Result<Vec<T>, AppError> {
    let resposta = recurso.listar(filtro).await?;
    Ok(desembrulhar_lista(resposta)?)
}
